use std::path::Path;
use std::time::Duration;

use ::cookie::time::OffsetDateTime;
use http::header::{HeaderMap, HeaderValue, SET_COOKIE};
use serde::Serialize;

use super::loader::load_section;
use super::overlay::CookiePatch;
use super::ConfigError;

/// Session cookie policy.
///
/// `name` must be a valid HTTP token (no control or separator characters).
/// This is not checked; a name that cannot be carried in a header makes
/// [`set`](Self::set) skip the cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cookie {
    #[serde(with = "age_nanos")]
    pub age: Duration,
    pub domain: String,
    pub http_only: bool,
    pub name: String,
    pub path: String,
    pub secure: bool,
}

impl Default for Cookie {
    /// A two week `sessionid` cookie on `/`, neither secure nor HTTP-only.
    fn default() -> Self {
        Self {
            age: Duration::from_secs(14 * 24 * 60 * 60),
            domain: String::new(),
            http_only: false,
            name: "sessionid".to_string(),
            path: "/".to_string(),
            secure: false,
        }
    }
}

impl Cookie {
    /// Loads a cookie section from its own file, overlaying the fields it
    /// names onto [`Cookie::default`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let patch: CookiePatch = load_section(path.as_ref())?;
        Ok(patch.apply(Self::default()))
    }

    /// Expiration for a cookie issued at `now`.
    pub fn expiration_from(&self, now: OffsetDateTime) -> OffsetDateTime {
        now + self.age
    }

    /// Appends a `Set-Cookie` header carrying `value` to `headers`.
    ///
    /// An empty domain or path is left out of the header.
    pub fn set(&self, headers: &mut HeaderMap, value: impl Into<String>, expires: OffsetDateTime) {
        let mut builder = ::cookie::Cookie::build((self.name.clone(), value.into()))
            .expires(expires)
            .http_only(self.http_only)
            .secure(self.secure);
        if !self.path.is_empty() {
            builder = builder.path(self.path.clone());
        }
        if !self.domain.is_empty() {
            builder = builder.domain(self.domain.clone());
        }
        let rendered = builder.build().to_string();

        match HeaderValue::from_str(&rendered) {
            Ok(header) => {
                headers.append(SET_COOKIE, header);
            }
            Err(err) => {
                tracing::warn!(cookie = %self.name, error = %err, "skipping unrepresentable Set-Cookie header");
            }
        }
    }
}

/// Durations as integer nanoseconds.
pub(crate) mod age_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(age: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let nanos = u64::try_from(age.as_nanos()).unwrap_or(u64::MAX);
        serializer.serialize_u64(nanos)
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = Option::<u64>::deserialize(deserializer)?;
        Ok(nanos.map(Duration::from_nanos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn jan_2014() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_388_534_400).unwrap()
    }

    fn set_cookie_headers(headers: &HeaderMap) -> Vec<&str> {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| value.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_default_cookie() {
        let cookie = Cookie::default();
        assert_eq!(cookie.age, Duration::from_secs(336 * 60 * 60));
        assert_eq!(cookie.domain, "");
        assert!(!cookie.http_only);
        assert_eq!(cookie.name, "sessionid");
        assert_eq!(cookie.path, "/");
        assert!(!cookie.secure);
    }

    #[test]
    fn test_set_default_cookie() {
        let mut headers = HeaderMap::new();
        Cookie::default().set(&mut headers, "KEY", jan_2014());

        assert_eq!(
            set_cookie_headers(&headers),
            vec!["sessionid=KEY; Path=/; Expires=Wed, 01 Jan 2014 00:00:00 GMT"]
        );
    }

    #[test]
    fn test_set_with_domain_and_flags() {
        let cookie = Cookie {
            domain: "example.com".to_string(),
            http_only: true,
            secure: true,
            ..Cookie::default()
        };
        let mut headers = HeaderMap::new();
        cookie.set(&mut headers, "KEY", jan_2014());

        let rendered = set_cookie_headers(&headers);
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].starts_with("sessionid=KEY"));
        assert!(rendered[0].contains("; Domain=example.com"));
        assert!(rendered[0].contains("; HttpOnly"));
        assert!(rendered[0].contains("; Secure"));
    }

    #[test]
    fn test_set_appends_headers() {
        let mut headers = HeaderMap::new();
        let cookie = Cookie::default();
        cookie.set(&mut headers, "first", jan_2014());
        cookie.set(&mut headers, "second", jan_2014());
        assert_eq!(set_cookie_headers(&headers).len(), 2);
    }

    #[test]
    fn test_set_skips_invalid_header() {
        let cookie = Cookie {
            name: "bad\nname".to_string(),
            ..Cookie::default()
        };
        let mut headers = HeaderMap::new();
        cookie.set(&mut headers, "KEY", jan_2014());
        assert!(headers.is_empty());
    }

    #[test]
    fn test_expiration_from() {
        let cookie = Cookie {
            age: Duration::from_secs(60),
            ..Cookie::default()
        };
        let expires = cookie.expiration_from(jan_2014());
        assert_eq!(expires.unix_timestamp(), 1_388_534_460);
    }

    #[test]
    fn test_from_path_overlays_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"name": "sid", "secure": true}}"#).unwrap();

        let cookie = Cookie::from_path(file.path()).unwrap();
        assert_eq!(cookie.name, "sid");
        assert!(cookie.secure);
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.age, Cookie::default().age);
    }

    #[test]
    fn test_age_serializes_as_nanos() {
        let value = serde_json::to_value(Cookie::default()).unwrap();
        assert_eq!(value["age"], 1_209_600_000_000_000u64);
    }
}
