use crate::Credential;
use async_trait::async_trait;
use bce_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a credential supplied by the caller.
///
/// This is the provider behind `Client::new(credential)`: the pair is fixed
/// for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with access key ID and secret access key.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            credential: Credential::new(access_key_id, secret_access_key),
        }
    }

    /// Set the STS security token.
    pub fn with_security_token(mut self, token: &str) -> Self {
        self.credential.security_token = Some(token.to_string());
        self
    }
}

impl From<Credential> for StaticCredentialProvider {
    fn from(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("test_access_key", "test_secret_key");
        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.access_key_id, "test_access_key");
        assert_eq!(cred.secret_access_key, "test_secret_key");
        assert!(cred.security_token.is_none());

        let provider = StaticCredentialProvider::new("test_access_key", "test_secret_key")
            .with_security_token("test_security_token");
        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.security_token.as_deref(), Some("test_security_token"));

        Ok(())
    }

    #[tokio::test]
    async fn test_from_credential() -> anyhow::Result<()> {
        let provider = StaticCredentialProvider::from(Credential::new("ak", "sk"));
        let cred = provider.provide_credential(&Context::new()).await?;
        assert_eq!(cred, Some(Credential::new("ak", "sk")));

        Ok(())
    }
}
