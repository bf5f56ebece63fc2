use std::fs::File;

use anyhow::{Context as _, Result};
use baidubce::aip::{self, ConclusionType};
use baidubce::auth::StaticCredentialProvider;
use baidubce::default_context;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let path = std::env::args().nth(1).context("usage: audit_image <path>")?;
    let ak = std::env::var("ACCESS_KEY_ID").context("ACCESS_KEY_ID must be set")?;
    let sk = std::env::var("SECRET_ACCESS_KEY").context("SECRET_ACCESS_KEY must be set")?;

    let client = aip::Client::with_provider(
        default_context(),
        StaticCredentialProvider::new(&ak, &sk),
        aip::Client::default_config().with_debug(true),
    );

    let resp = client.audit_image_reader(File::open(&path)?).await?;
    match resp.conclusion_type {
        Some(ConclusionType::Qualified) => println!("{path}: qualified"),
        Some(ConclusionType::Unqualified) => println!("{path}: unqualified, {:?}", resp.data),
        Some(other) => println!("{path}: {other:?} ({:?})", resp.conclusion),
        None => println!(
            "{path}: audit failed, error_code={}, error_msg={:?}",
            resp.error_code, resp.error_msg
        ),
    }

    Ok(())
}
