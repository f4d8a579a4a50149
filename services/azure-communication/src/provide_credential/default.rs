use crate::provide_credential::{ConfigCredentialProvider, EnvCredentialProvider};
use crate::{Config, Credential};
use async_trait::async_trait;
use hmacsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// Default loader that tries multiple credential sources in order.
///
/// The default loader attempts to load credentials from the following sources in order:
/// 1. Configuration (access key, connection string)
/// 2. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        DefaultCredentialProviderBuilder::new().build()
    }
}

impl DefaultCredentialProvider {
    /// Create a new default loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder to customize the default chain.
    pub fn builder() -> DefaultCredentialProviderBuilder {
        DefaultCredentialProviderBuilder::new()
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

/// Builder for [`DefaultCredentialProvider`].
#[derive(Debug, Default)]
pub struct DefaultCredentialProviderBuilder {
    config: Option<Config>,
    disable_env: bool,
}

impl DefaultCredentialProviderBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this config as the first source of the chain.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Skip loading credentials from environment variables.
    pub fn disable_env(mut self, disable: bool) -> Self {
        self.disable_env = disable;
        self
    }

    /// Build the default credential provider.
    pub fn build(self) -> DefaultCredentialProvider {
        let mut chain = ProvideCredentialChain::new();

        if let Some(config) = self.config {
            chain = chain.push(ConfigCredentialProvider::with_config(config));
        }

        if !self.disable_env {
            chain = chain.push(EnvCredentialProvider::new());
        }

        DefaultCredentialProvider { chain }
    }
}
