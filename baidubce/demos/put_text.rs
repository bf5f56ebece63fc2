use anyhow::Result;
use baidubce::vcr;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    // Loads BCE_ACCESS_KEY_ID and BCE_SECRET_ACCESS_KEY.
    let client = vcr::Client::from_env();

    let text = std::env::args().nth(1).unwrap_or_else(|| "hello world".to_string());
    match client.put_text(&text).await {
        Ok(resp) => println!("label: {}\nresults: {:#}", resp.label, resp.results),
        Err(baidubce::Error::Service(err)) => eprintln!("{err}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
