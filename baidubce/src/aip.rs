//! Image audit (AIP) client.
//!
//! ```no_run
//! # async fn example() -> baidubce::Result<()> {
//! use baidubce::aip::{Client, ConclusionType};
//! use baidubce::auth::Credential;
//!
//! let client = Client::new(Credential::new("access_key_id", "secret_access_key"));
//! let resp = client.audit_image(b"\x89PNG\r\n...").await?;
//! if resp.conclusion_type == Some(ConclusionType::Unqualified) {
//!     println!("image rejected: {:?}", resp.conclusion);
//! }
//! # Ok(())
//! # }
//! ```

use std::io::Read;

use bce_auth_v1::Credential;
use bce_core::hash::base64_encode;
use bce_core::{Context, ProvideCredential};
use bytes::Bytes;
use http::Method;
use serde::Deserialize;

use crate::client::ServiceClient;
use crate::{Config, Error, Result};

/// Location code of the image audit service.
pub const DEFAULT_LOCATION: &str = "aip";
/// Api version of the image audit service.
pub const DEFAULT_API_VERSION: &str = "rest/2.0/solution/v1";

const IMAGE_AUDIT_PATH: &str = "img_censor/user_defined";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Classification of an audited image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum ConclusionType {
    /// `1`: the image is compliant.
    Qualified,
    /// `2`: the image violates the configured rules.
    Unqualified,
    /// `3`: the image is suspicious and needs a manual review.
    Unsure,
    /// `4`: the audit itself failed.
    Failed,
    /// Any code the service adds later.
    Unknown(i64),
}

impl From<i64> for ConclusionType {
    fn from(code: i64) -> Self {
        match code {
            1 => ConclusionType::Qualified,
            2 => ConclusionType::Unqualified,
            3 => ConclusionType::Unsure,
            4 => ConclusionType::Failed,
            v => ConclusionType::Unknown(v),
        }
    }
}

impl ConclusionType {
    /// The numeric code used on the wire.
    pub fn code(&self) -> i64 {
        match self {
            ConclusionType::Qualified => 1,
            ConclusionType::Unqualified => 2,
            ConclusionType::Unsure => 3,
            ConclusionType::Failed => 4,
            ConclusionType::Unknown(v) => *v,
        }
    }
}

/// Response of [`Client::audit_image`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageAuditResponse {
    /// `0` on success.
    #[serde(default)]
    pub error_code: i64,
    pub error_msg: Option<String>,
    pub log_id: Option<u64>,
    /// Conclusion in words, such as `合规`.
    pub conclusion: Option<String>,
    #[serde(rename = "conclusionType")]
    pub conclusion_type: Option<ConclusionType>,
    /// Per rule hits, kept as returned.
    pub data: Option<serde_json::Value>,
}

/// Client of the image audit service.
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

    /// The configuration of this client.
    pub fn config(&self) -> &Config {
        self.inner.config()
    }

    /// See [`Config::endpoint`].
    pub fn endpoint(&self) -> String {
        self.config().endpoint()
    }

    /// See [`Config::base_url`].
    pub fn base_url(&self) -> String {
        self.config().base_url()
    }

    /// Audit an image against the rules configured for the account.
    ///
    /// The image is sent base64 encoded in an `image` form field.
    pub async fn audit_image(&self, image: &[u8]) -> Result<ImageAuditResponse> {
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("image", &base64_encode(image))
            .finish();

        self.inner
            .send_json(
                Method::POST,
                IMAGE_AUDIT_PATH,
                Some(FORM_CONTENT_TYPE),
                Bytes::from(body),
            )
            .await
    }

    /// Read the image from `r` to its end and audit it.
    pub async fn audit_image_reader(&self, mut r: impl Read) -> Result<ImageAuditResponse> {
        let mut image = Vec::new();
        r.read_to_end(&mut image).map_err(|e| {
            Error::Request(bce_core::Error::request_invalid("read image failed").with_source(e))
        })?;

        self.audit_image(&image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conclusion_type_codes() {
        for code in 1..=4 {
            assert_eq!(ConclusionType::from(code).code(), code);
        }
        assert_eq!(ConclusionType::from(2), ConclusionType::Unqualified);
        assert_eq!(ConclusionType::from(7), ConclusionType::Unknown(7));
    }

    #[test]
    fn test_image_audit_response_deserialize() {
        let resp: ImageAuditResponse = serde_json::from_str(
            r#"{"log_id":123,"error_code":0,"conclusion":"不合规","conclusionType":2,"data":[{"type":1}]}"#,
        )
        .unwrap();

        assert_eq!(resp.error_code, 0);
        assert_eq!(resp.log_id, Some(123));
        assert_eq!(resp.conclusion.as_deref(), Some("不合规"));
        assert_eq!(resp.conclusion_type, Some(ConclusionType::Unqualified));
        assert_eq!(resp.data, Some(serde_json::json!([{"type": 1}])));
    }

    #[test]
    fn test_image_audit_error_deserialize() {
        let resp: ImageAuditResponse =
            serde_json::from_str(r#"{"error_code":216201,"error_msg":"image format error"}"#)
                .unwrap();

        assert_eq!(resp.error_code, 216201);
        assert_eq!(resp.error_msg.as_deref(), Some("image format error"));
        assert!(resp.conclusion_type.is_none());
    }

    #[test]
    fn test_default_config() {
        let cfg = Client::default_config();
        assert_eq!(cfg.endpoint(), "http://aip.baidubce.com");
        assert_eq!(
            cfg.url(IMAGE_AUDIT_PATH),
            "http://aip.baidubce.com/rest/2.0/solution/v1/img_censor/user_defined"
        );
    }
}
