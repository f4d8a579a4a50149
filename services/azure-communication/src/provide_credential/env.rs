use async_trait::async_trait;
use hmacsign_core::{Context, ProvideCredential, Result};

use crate::{Config, Credential};

/// EnvCredentialProvider loads the access key from environment variables.
///
/// Resolution follows [`Config::credential`] on a config read through
/// [`Config::from_env`]: `AZURE_COMMUNICATION_ACCESS_KEY` wins over the key
/// embedded in `AZURE_COMMUNICATION_CONNECTION_STRING`.
#[derive(Clone, Debug, Default)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new env credential provider.
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        Config::default().from_env(ctx).credential()
    }
}
