//! Text review (VCR) client.

use bce_auth_v1::Credential;
use bce_core::{Context, ProvideCredential};
use bytes::Bytes;
use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::ServiceClient;
use crate::{Config, Error, Result};

/// Location code of the text review service.
pub const DEFAULT_LOCATION: &str = "vcr.bj";
/// Api version of the text review service.
pub const DEFAULT_API_VERSION: &str = "v1";

const TEXT_PATH: &str = "text";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Serialize)]
struct PutTextRequest<'a> {
    text: &'a str,
}

/// Response of [`Client::put_text`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PutTextResponse {
    /// Overall verdict, such as `NORMAL` or `REJECT`.
    pub label: String,
    /// Detailed hits, kept as returned.
    #[serde(default)]
    pub results: serde_json::Value,
}

/// Client of the text review service.
#[derive(Clone, Debug)]
pub struct Client {
    inner: ServiceClient,
}

impl Client {
    /// The config used by [`Client::new`] and [`Client::from_env`].
    pub fn default_config() -> Config {
        Config::new(DEFAULT_LOCATION, DEFAULT_API_VERSION)
    }

    /// Create a client with a static credential and the default context.
    #[cfg(feature = "default-context")]
    pub fn new(credential: Credential) -> Self {
        Self::with_provider(
            crate::default_context(),
            bce_auth_v1::StaticCredentialProvider::from(credential),
            Self::default_config(),
        )
    }

    /// Create a client that loads credentials from `BCE_ACCESS_KEY_ID` and
    /// `BCE_SECRET_ACCESS_KEY`.
    #[cfg(feature = "default-context")]
    pub fn from_env() -> Self {
        Self::with_provider(
            crate::default_context(),
            bce_auth_v1::DefaultCredentialProvider::new(),
            Self::default_config(),
        )
    }

    /// Create a client from its parts.
    pub fn with_provider(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        config: Config,
    ) -> Self {
        Self {
            inner: ServiceClient::new(ctx, provider, config),
        }
    }

    pub fn config(&self) -> &Config {
        self.inner.config()
    }

    pub fn endpoint(&self) -> String {
        self.config().endpoint()
    }

    pub fn base_url(&self) -> String {
        self.config().base_url()
    }

    /// Submit `text` for review.
    pub async fn put_text(&self, text: &str) -> Result<PutTextResponse> {
        let body = serde_json::to_vec(&PutTextRequest { text }).map_err(|e| {
            Error::Request(bce_core::Error::request_invalid("encode request body failed").with_source(e))
        })?;

        self.inner
            .send_json(
                Method::PUT,
                TEXT_PATH,
                Some(JSON_CONTENT_TYPE),
                Bytes::from(body),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_put_text_request_serialize() {
        let body = serde_json::to_string(&PutTextRequest { text: "你好 \"world\"" }).unwrap();
        assert_eq!(body, r#"{"text":"你好 \"world\""}"#);
    }

    #[test]
    fn test_put_text_response_without_results() {
        let resp: PutTextResponse = serde_json::from_str(r#"{"label":"NORMAL"}"#).unwrap();
        assert_eq!(resp.label, "NORMAL");
        assert!(resp.results.is_null());
    }
}
