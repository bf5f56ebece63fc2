use anyhow::Result;
use bce_auth_v1::{
    DefaultCredentialProvider, EnvCredentialProvider, RequestSigner, StaticCredentialProvider,
};
use bce_core::{Context, OsEnv, ProvideCredentialChain, Signer};
use bce_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    // Environment credentials win; the demo pair is only used when they are absent.
    let provider = DefaultCredentialProvider::with_chain(
        ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(StaticCredentialProvider::new("demo-ak", "demo-sk")),
    );

    let signer = Signer::new(ctx.clone(), provider, RequestSigner::new().with_debug(true));

    let body = Bytes::from_static(br#"{"text":"hello world"}"#);
    let mut parts = http::Request::put("http://vcr.bj.baidubce.com/v1/text")
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(())?
        .into_parts()
        .0;

    signer.sign(&mut parts, None).await?;
    println!("Authorization: {:?}", parts.headers["authorization"]);

    let resp = ctx
        .http_send_as_string(http::Request::from_parts(parts, body))
        .await?;
    println!("{}: {}", resp.status(), resp.body());

    Ok(())
}
