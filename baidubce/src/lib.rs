#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use bce_core::{Context, Env, HttpSend, OsEnv, ProvideCredential, Signer, StaticEnv};

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_context, default_context_with_client};

mod config;
pub use config::{Config, BCE_DOMAIN};

mod error;
pub use error::{Error, Result, ServiceError, EMPTY_REQUEST_ID};

pub mod client;

pub mod aip;
pub mod vcr;

/// Credentials, credential providers and the `bce-auth-v1` signer.
pub mod auth {
    pub use bce_auth_v1::*;
}
