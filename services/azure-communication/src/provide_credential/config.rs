use async_trait::async_trait;
use hmacsign_core::{Context, ProvideCredential, Result};

use crate::{Config, Credential};

/// ConfigCredentialProvider resolves the credential from a [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a provider with an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider from an existing config.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the base64 encoded access key.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.config.access_key = Some(access_key.into());
        self
    }

    /// Set the connection string.
    pub fn with_connection_string(mut self, conn_str: impl Into<String>) -> Self {
        self.config.connection_string = Some(conn_str.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        self.config.credential()
    }
}
