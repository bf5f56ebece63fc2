//! Signer for Baidu Cloud (BCE) services using `bce-auth-v1`.
//!
//! ```no_run
//! use bce_auth_v1::{RequestSigner, StaticCredentialProvider};
//! use bce_core::{Context, Signer};
//!
//! # async fn example() -> bce_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("access_key_id", "secret_access_key"),
//!     RequestSigner::new(),
//! );
//!
//! let mut parts = http::Request::put("http://vcr.bj.baidubce.com/v1/text")
//!     .header("Content-Type", "application/json")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
