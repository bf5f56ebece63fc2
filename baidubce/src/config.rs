use std::time::Duration;

use bce_auth_v1::DEFAULT_EXPIRATION_IN_SECONDS;

/// Domain every location code is resolved under.
pub const BCE_DOMAIN: &str = "baidubce.com";

/// Config carries the endpoint and signing options of one service client.
///
/// The client keeps its own copy behind an `Arc`, so changes made after
/// construction never affect requests in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Service location code, for example `aip` or `vcr.bj`.
    ///
    /// The host is derived as `{location}.baidubce.com` unless [`Config::host`] is set.
    pub location: String,
    /// Path prefix every operation path is joined to, for example `v1`.
    ///
    /// Leading and trailing `/` are ignored.
    pub api_version: String,
    /// Explicit host, overriding the one derived from `location`.
    pub host: Option<String>,
    /// Log outgoing requests, responses and the canonical request at `debug` level.
    pub debug: bool,
    /// Validity period of every signature.
    ///
    /// - default to 1800 seconds
    pub expires_in: Duration,
}

impl Config {
    /// Create a config for the given location and api version.
    pub fn new(location: &str, api_version: &str) -> Self {
        Self {
            location: location.to_string(),
            api_version: api_version.trim_matches('/').to_string(),
            host: None,
            debug: false,
            expires_in: Duration::from_secs(DEFAULT_EXPIRATION_IN_SECONDS),
        }
    }

    /// Set the location code.
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Set an explicit host such as `vcr.bj.baidubce.com` or `127.0.0.1:8080`.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Set the api version path prefix.
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.trim_matches('/').to_string();
        self
    }

    /// Enable or disable debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the signature expiration.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// The host requests are sent to.
    pub fn host(&self) -> String {
        match self.host.as_deref() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => format!("{}.{BCE_DOMAIN}", self.location),
        }
    }

    /// `http://` followed by [`Config::host`].
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.host())
    }

    /// [`Config::endpoint`] joined with the api version.
    pub fn base_url(&self) -> String {
        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            return self.endpoint();
        }

        format!("{}/{version}", self.endpoint())
    }

    /// Full URL of an operation path, joined to [`Config::base_url`] with exactly one `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_from_location() {
        let cfg = Config::new("vcr.bj", "v1");

        assert_eq!(cfg.host(), "vcr.bj.baidubce.com");
        assert_eq!(cfg.endpoint(), "http://vcr.bj.baidubce.com");
        assert_eq!(cfg.base_url(), "http://vcr.bj.baidubce.com/v1");
        assert_eq!(cfg.url("text"), "http://vcr.bj.baidubce.com/v1/text");
    }

    #[test]
    fn test_endpoint_with_host() {
        let cfg = Config::new("aip", "/rest/2.0/solution/v1").with_host("127.0.0.1:8080");

        assert_eq!(cfg.api_version, "rest/2.0/solution/v1");
        assert_eq!(cfg.endpoint(), "http://127.0.0.1:8080");
        assert_eq!(
            cfg.url("/img_censor/user_defined"),
            "http://127.0.0.1:8080/rest/2.0/solution/v1/img_censor/user_defined"
        );
    }

    #[test]
    fn test_empty_host_falls_back_to_location() {
        let cfg = Config::new("vcr.bj", "v1").with_host("");

        assert_eq!(cfg.host(), "vcr.bj.baidubce.com");
    }

    #[test]
    fn test_api_version_is_joined_with_one_slash() {
        let mut cfg = Config::new("vcr.bj", "v1");
        cfg.api_version = "/v2/".to_string();
        assert_eq!(cfg.base_url(), "http://vcr.bj.baidubce.com/v2");

        let cfg = cfg.with_api_version("");
        assert_eq!(cfg.base_url(), "http://vcr.bj.baidubce.com");
        assert_eq!(cfg.url("text"), "http://vcr.bj.baidubce.com/text");
    }

    #[test]
    fn test_default_expiration() {
        let cfg = Config::new("vcr.bj", "v1");
        assert_eq!(cfg.expires_in, Duration::from_secs(1800));
        assert!(!cfg.debug);

        let cfg = cfg
            .with_expires_in(Duration::from_secs(60))
            .with_debug(true)
            .with_location("vcr.gz");
        assert_eq!(cfg.expires_in, Duration::from_secs(60));
        assert!(cfg.debug);
        assert_eq!(cfg.host(), "vcr.gz.baidubce.com");
    }
}
