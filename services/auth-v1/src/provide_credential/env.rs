use crate::{constants::*, Credential};
use async_trait::async_trait;
use bce_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads BCE credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `BCE_ACCESS_KEY_ID`: The BCE access key ID
/// - `BCE_SECRET_ACCESS_KEY`: The BCE secret access key
/// - `BCE_SESSION_TOKEN`: The STS security token (optional)
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let access_key_id = envs.get(BCE_ACCESS_KEY_ID).filter(|v| !v.is_empty());
        let secret_access_key = envs.get(BCE_SECRET_ACCESS_KEY).filter(|v| !v.is_empty());

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential {
                access_key_id: ak.clone(),
                secret_access_key: sk.clone(),
                security_token: envs.get(BCE_SESSION_TOKEN).cloned(),
            })),
            _ => Ok(None),
        }
    }
}
