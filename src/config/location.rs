//! Composed URLs for derived addresses.
//!
//! [`Location`] keeps the pieces of a URL separately and renders them
//! without normalization: no trailing slash is added to an empty path and
//! default ports are not elided, so the string form is exactly what the
//! settings describe.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Path bytes left as-is: unreserved characters, `/`, and the sub-delimiters
/// that may appear unescaped in a path segment.
const PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// Userinfo bytes left as-is. `@`, `/`, `?`, and `:` are always escaped.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// A URL assembled from settings fields.
///
/// Rendering rules:
/// - `scheme://` is written whenever a scheme, host, or userinfo is present.
/// - userinfo is written as `user[:password]@`, both percent-encoded.
/// - a relative path is joined to a non-empty host with a single `/`.
/// - query pairs are form-encoded after a `?`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    scheme: String,
    user: Option<(String, Option<String>)>,
    host: String,
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            ..Self::default()
        }
    }

    /// Attaches userinfo. An empty password is left out of the rendered form.
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        let password = password.into();
        self.user = Some((user.into(), (!password.is_empty()).then_some(password)));
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.set_path(path);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Replaces the path. The value is kept as given; joining to the host
    /// happens at render time.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parses the rendered form with the `url` crate.
    ///
    /// The result is normalized (for example `http` URLs gain a `/` path),
    /// so its string form may differ from [`Location`]'s own.
    pub fn to_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.to_string())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if !self.scheme.is_empty() || !self.host.is_empty() || self.user.is_some() {
            f.write_str("//")?;
        }
        if let Some((user, password)) = &self.user {
            write!(f, "{}", utf8_percent_encode(user, USERINFO))?;
            if let Some(password) = password {
                write!(f, ":{}", utf8_percent_encode(password, USERINFO))?;
            }
            f.write_str("@")?;
        }
        f.write_str(&self.host)?;

        if !self.path.is_empty() {
            if !self.host.is_empty() && !self.path.starts_with('/') {
                f.write_str("/")?;
            }
            write!(f, "{}", utf8_percent_encode(&self.path, PATH))?;
        }

        if !self.query.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}
