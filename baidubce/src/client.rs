//! Shared request pipeline of the service clients.

use std::sync::Arc;

use bce_auth_v1::{Credential, RequestSigner, X_BCE_REQUEST_ID};
use bce_core::{Context, ProvideCredential, Signer};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HOST};
use http::{Method, Request, Response, StatusCode};
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::{Config, Error, Result, ServiceError};

/// ServiceClient builds, signs and sends the requests of one service.
///
/// It owns the endpoint configuration and the signer; the transport comes
/// from the signer's [`Context`].
#[derive(Clone, Debug)]
pub struct ServiceClient {
    config: Arc<Config>,
    signer: Signer<Credential>,
}

impl ServiceClient {
    /// Create a new client that resolves credentials from `provider`.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        config: Config,
    ) -> Self {
        let signer = Signer::new(ctx, provider, RequestSigner::new().with_debug(config.debug));

        Self {
            config: Arc::new(config),
            signer,
        }
    }

    /// The configuration of this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a request to `path` under the base url and return the raw response.
    ///
    /// Statuses other than `200 OK` and `206 Partial Content` are returned as
    /// [`Error::Service`].
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Bytes,
    ) -> Result<Response<Bytes>> {
        let url = self.config.url(path);

        let mut req = Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .header(HOST, self.config.host())
            .header(CONTENT_LENGTH, body.len());
        if let Some(content_type) = content_type {
            req = req.header(CONTENT_TYPE, content_type);
        }
        let (mut parts, body) = req
            .body(body)
            .map_err(|e| Error::Request(e.into()))?
            .into_parts();

        self.signer
            .sign(&mut parts, Some(self.config.expires_in))
            .await
            .map_err(Error::Sign)?;
        let req = Request::from_parts(parts, body);

        if self.config.debug {
            debug!("send request: {method} {url}, headers: {:?}", req.headers());
        }

        let resp = self
            .signer
            .context()
            .http_send(req)
            .await
            .map_err(Error::Transport)?;

        if self.config.debug {
            debug!(
                "got response: {}, body: {:?}",
                resp.status(),
                String::from_utf8_lossy(resp.body())
            );
        }

        match resp.status() {
            StatusCode::OK | StatusCode::PARTIAL_CONTENT => Ok(resp),
            _ => Err(parse_error(&method, &resp).into()),
        }
    }

    /// Send a request and decode the JSON body of a successful response.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Bytes,
    ) -> Result<T> {
        let resp = self.send(method, path, content_type, body).await?;

        serde_json::from_slice(resp.body()).map_err(Error::Decode)
    }
}

/// Turn a failed response into a [`ServiceError`].
///
/// `HEAD` and `DELETE` carry no body, so their error is derived from the
/// status. Other bodies that don't decode as an error envelope fall back to
/// the same status derived error.
fn parse_error(method: &Method, resp: &Response<Bytes>) -> ServiceError {
    let request_id = resp
        .headers()
        .get(X_BCE_REQUEST_ID)
        .and_then(|v| v.to_str().ok());

    if *method == Method::HEAD || *method == Method::DELETE {
        return ServiceError::from_status(resp.status(), None);
    }

    match serde_json::from_slice::<ServiceError>(resp.body()) {
        Ok(mut err) => {
            if err.request_id.is_empty() {
                err.request_id = ServiceError::from_status(resp.status(), request_id).request_id;
            }
            err
        }
        Err(e) => {
            warn!(
                "service returned {} with an undecodable error body: {e}",
                resp.status()
            );
            ServiceError::from_status(resp.status(), request_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &'static str) -> Response<Bytes> {
        Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn test_parse_error_envelope() {
        let resp = response(
            403,
            r#"{"code":"AccessDenied","message":"m","requestId":"r"}"#,
        );

        let err = parse_error(&Method::PUT, &resp);
        assert_eq!(err.code, "AccessDenied");
        assert_eq!(err.message, "m");
        assert_eq!(err.request_id, "r");
    }

    #[test]
    fn test_parse_error_head_and_delete() {
        for method in [Method::HEAD, Method::DELETE] {
            let err = parse_error(&method, &response(404, ""));
            assert_eq!(err.code, "404");
            assert_eq!(err.message, "404 Not Found");
            assert_eq!(err.request_id, "EMPTY");
        }
    }

    #[test]
    fn test_parse_error_malformed_body() {
        let mut resp = response(502, "<html>bad gateway</html>");
        resp.headers_mut()
            .insert(X_BCE_REQUEST_ID, "req-502".parse().unwrap());

        let err = parse_error(&Method::POST, &resp);
        assert_eq!(err.code, "502");
        assert_eq!(err.message, "502 Bad Gateway");
        assert_eq!(err.request_id, "req-502");
    }

    #[test]
    fn test_parse_error_without_request_id() {
        let mut resp = response(400, r#"{"code":"InvalidArgument","message":"m"}"#);
        resp.headers_mut()
            .insert(X_BCE_REQUEST_ID, "req-400".parse().unwrap());

        let err = parse_error(&Method::PUT, &resp);
        assert_eq!(err.code, "InvalidArgument");
        assert_eq!(err.request_id, "req-400");
    }
}
