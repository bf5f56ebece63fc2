use bce_core::{Context, OsEnv};
use bce_http_send_reqwest::ReqwestHttpSend;

/// Create a context with a reqwest transport and the OS environment.
///
/// ```no_run
/// let ctx = baidubce::default_context();
/// ```
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a default context that sends requests through `client`.
///
/// Timeouts, proxies and TLS settings are taken from the client as is.
pub fn default_context_with_client(client: reqwest::Client) -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv)
}
