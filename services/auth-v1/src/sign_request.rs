//! Baidu Cloud `bce-auth-v1` request signer
use std::time::Duration;

use http::header::AUTHORIZATION;
use http::header::CONTENT_LENGTH;
use http::header::CONTENT_TYPE;
use http::header::HOST;
use http::HeaderValue;
use log::debug;
use percent_encoding::utf8_percent_encode;

use bce_core::hash::hex_hmac_sha256;
use bce_core::time::format_iso8601;
use bce_core::time::now;
use bce_core::time::DateTime;
use bce_core::{Context, Error, Result, SignRequest, SigningRequest};

use super::constants::*;
use super::credential::Credential;

/// RequestSigner that implements Baidu Cloud `bce-auth-v1` Authorization.
///
/// - [Generate the authentication string](https://cloud.baidu.com/doc/Reference/s/njwvz1yfu)
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
    debug: bool,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the canonical request and auth string of every signed request.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let now = self.time.unwrap_or_else(now);
        let expiration = expires_in
            .map(|v| v.as_secs())
            .unwrap_or(DEFAULT_EXPIRATION_IN_SECONDS);

        let mut ctx = SigningRequest::build(parts)?;

        for (_, v) in ctx.headers.iter_mut() {
            SigningRequest::header_value_normalize(v);
        }
        if !ctx.headers.contains_key(HOST) {
            ctx.headers.insert(HOST, ctx.authority.as_str().parse()?);
        }
        ctx.headers.insert(X_BCE_DATE, format_iso8601(now).parse()?);
        if let Some(token) = &cred.security_token {
            let mut value: HeaderValue = token.parse()?;
            value.set_sensitive(true);
            ctx.headers.insert(X_BCE_SECURITY_TOKEN, value);
        }

        let auth_prefix = format!(
            "{BCE_AUTH_VERSION}/{}/{}/{expiration}",
            cred.access_key_id,
            format_iso8601(now)
        );
        let signing_key = hex_hmac_sha256(cred.secret_access_key.as_bytes(), auth_prefix.as_bytes());

        let (canonical_headers, signed_headers) = canonicalize_headers(&ctx)?;
        let canonical_request = format!(
            "{}\n{}\n{}\n{}",
            ctx.method.as_str(),
            canonicalize_uri(&ctx),
            canonicalize_query(&ctx),
            canonical_headers
        );
        if self.debug {
            debug!("canonical request: {canonical_request:?}");
        }

        let signature = hex_hmac_sha256(signing_key.as_bytes(), canonical_request.as_bytes());
        let authorization = format!("{auth_prefix}/{signed_headers}/{signature}");
        if self.debug {
            debug!("auth string prefix: {auth_prefix}, signed headers: {signed_headers}");
        }

        let mut value: HeaderValue = authorization.parse()?;
        value.set_sensitive(true);
        ctx.headers.insert(AUTHORIZATION, value);

        ctx.apply(parts)
    }
}

/// Canonical URI is the percent decoded path encoded again with every
/// reserved byte except `/`.
fn canonicalize_uri(ctx: &SigningRequest) -> String {
    let path = ctx.path_percent_decoded();
    if path.is_empty() {
        return "/".to_string();
    }

    utf8_percent_encode(&path, &BCE_PATH_ENCODE_SET).to_string()
}

/// Canonical query string.
///
/// ```text
/// uriencode(k1)=uriencode(v1)&uriencode(k2)=
/// ```
///
/// Parameters are sorted after encoding and `authorization` is never signed.
fn canonicalize_query(ctx: &SigningRequest) -> String {
    let mut params: Vec<String> = ctx
        .query
        .iter()
        .filter(|(k, _)| !k.eq_ignore_ascii_case("authorization"))
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, &BCE_URI_ENCODE_SET),
                utf8_percent_encode(v, &BCE_URI_ENCODE_SET)
            )
        })
        .collect();
    params.sort();

    params.join("&")
}

/// Returns the canonical headers and the `;` separated signed header names.
///
/// Only `host`, `content-length`, `content-type`, `content-md5` and `x-bce-*`
/// headers with non-empty values take part in the signature.
fn canonicalize_headers(ctx: &SigningRequest) -> Result<(String, String)> {
    let headers: Vec<(String, String)> = ctx
        .header_to_vec_with_filter(is_signed_header)?
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| {
            (
                utf8_percent_encode(&k, &BCE_URI_ENCODE_SET).to_string(),
                utf8_percent_encode(&v, &BCE_URI_ENCODE_SET).to_string(),
            )
        })
        .collect();

    let mut names: Vec<&str> = headers.iter().map(|(k, _)| k.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    let signed_headers = names.join(";");

    Ok((
        SigningRequest::header_to_string(headers, ":", "\n"),
        signed_headers,
    ))
}

fn is_signed_header(name: &str) -> bool {
    name == HOST.as_str()
        || name == CONTENT_LENGTH.as_str()
        || name == CONTENT_TYPE.as_str()
        || name == CONTENT_MD5
        || name.starts_with(X_BCE_PREFIX)
}
