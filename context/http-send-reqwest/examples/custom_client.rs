use anyhow::Result;
use bce_core::Context;
use bce_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Timeouts and pooling belong to the transport, not to the BCE clients.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("bce-example/1.0")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    // An unsigned request: BCE answers with its JSON error envelope.
    let req = http::Request::builder()
        .method("PUT")
        .uri("http://vcr.bj.baidubce.com/v1/text")
        .header("Content-Type", "application/json")
        .body(Bytes::from_static(br#"{"text":"hello"}"#))?;

    let resp = ctx.http_send_as_string(req).await?;
    println!("status: {}", resp.status());
    println!("body: {}", resp.body());

    Ok(())
}
