use async_trait::async_trait;
use bce_core::Result;
use bce_core::{Context, ProvideCredential, ProvideCredentialChain};

use crate::credential::Credential;
use crate::provide_credential::EnvCredentialProvider;

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bce_auth_v1::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("access_key_id", "secret_access_key"));
    /// ```
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::StaticCredentialProvider;
    use bce_core::{OsEnv, StaticEnv};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_default_loader_without_env() {
        let ctx = Context::new().with_env(StaticEnv::default());

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap();

        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn test_default_loader_with_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (BCE_ACCESS_KEY_ID.to_string(), "access_key_id".to_string()),
                (
                    BCE_SECRET_ACCESS_KEY.to_string(),
                    "secret_access_key".to_string(),
                ),
            ]),
        });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("access_key_id", credential.access_key_id);
        assert_eq!("secret_access_key", credential.secret_access_key);
    }

    #[tokio::test]
    async fn test_default_loader_push_front() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (BCE_ACCESS_KEY_ID.to_string(), "env_ak".to_string()),
                (BCE_SECRET_ACCESS_KEY.to_string(), "env_sk".to_string()),
            ]),
        });

        let loader = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("static_ak", "static_sk"));
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("static_ak", credential.access_key_id);
    }

    #[test]
    fn test_default_loader_with_os_env() {
        temp_env::with_vars(
            vec![
                (BCE_ACCESS_KEY_ID, Some("os_access_key_id")),
                (BCE_SECRET_ACCESS_KEY, Some("os_secret_access_key")),
                (BCE_SESSION_TOKEN, None),
            ],
            || {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let ctx = Context::new().with_env(OsEnv);
                    let credential = DefaultCredentialProvider::default()
                        .provide_credential(&ctx)
                        .await
                        .expect("load must succeed")
                        .expect("credential must exist");

                    assert_eq!("os_access_key_id", credential.access_key_id);
                    assert_eq!("os_secret_access_key", credential.secret_access_key);
                    assert!(credential.security_token.is_none());
                })
            },
        );
    }
}
