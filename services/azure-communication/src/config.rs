use std::fmt::{Debug, Formatter};

use hmacsign_core::utils::Redact;
use hmacsign_core::{Context, Result};

use crate::connection_string;
use crate::constants::*;
use crate::Credential;

/// Config carries all the configuration for Azure Communication Services.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_COMMUNICATION_ENDPOINT`]
    /// - the `endpoint` field of the connection string
    pub endpoint: Option<String>,
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_COMMUNICATION_ACCESS_KEY`]
    /// - the `accesskey` field of the connection string
    pub access_key: Option<String>,
    /// `connection_string` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_COMMUNICATION_CONNECTION_STRING`]
    pub connection_string: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("access_key", &Redact::from(&self.access_key))
            .field("connection_string", &Redact::from(&self.connection_string))
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Values already set on this config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.endpoint.is_none() {
            self.endpoint = ctx.env_var(AZURE_COMMUNICATION_ENDPOINT);
        }

        if self.access_key.is_none() {
            self.access_key = ctx.env_var(AZURE_COMMUNICATION_ACCESS_KEY);
        }

        if self.connection_string.is_none() {
            self.connection_string = ctx.env_var(AZURE_COMMUNICATION_CONNECTION_STRING);
        }

        self
    }

    /// Parses an Azure Communication Services connection string into a
    /// configuration object.
    ///
    /// An example of a connection string looks like:
    ///
    /// ```txt
    /// endpoint=https://my-resource.communication.azure.com/;accesskey=c2VjcmV0LWtleQ==
    /// ```
    pub fn try_from_connection_string(conn_str: &str) -> Result<Self> {
        connection_string::parse(conn_str)
    }

    /// Resolve the credential described by this config.
    ///
    /// An explicit access key wins over the one embedded in the connection
    /// string. Returns `Ok(None)` if neither is set.
    pub fn credential(&self) -> Result<Option<Credential>> {
        if let Some(access_key) = &self.access_key {
            return Ok(Some(Credential::with_access_key(access_key)));
        }

        let Some(conn_str) = &self.connection_string else {
            return Ok(None);
        };

        let parsed = connection_string::parse(conn_str)?;
        Ok(parsed
            .access_key
            .as_deref()
            .map(Credential::with_access_key))
    }

    /// Resolve the endpoint, falling back to the one embedded in the
    /// connection string.
    pub fn resolved_endpoint(&self) -> Result<Option<String>> {
        if self.endpoint.is_some() {
            return Ok(self.endpoint.clone());
        }

        match &self.connection_string {
            Some(conn_str) => Ok(connection_string::parse(conn_str)?.endpoint),
            None => Ok(None),
        }
    }
}
