use std::collections::HashMap;

use hmacsign_core::{Error, Result};

use crate::Config;

/// Parses an [Azure Communication Services connection string][1].
///
/// ```txt
/// endpoint=https://my-resource.communication.azure.com/;accesskey=c2VjcmV0LWtleQ==
/// ```
///
/// Keys are matched case-insensitively. Values are kept verbatim, so base64
/// padding in the access key survives.
///
/// [1]: https://learn.microsoft.com/en-us/azure/communication-services/concepts/authentication
pub(crate) fn parse(conn_str: &str) -> Result<Config> {
    let mut key_values = parse_into_key_values(conn_str)?;

    let access_key = key_values.remove("accesskey").ok_or_else(|| {
        Error::config_invalid("invalid connection string, missing field: accesskey")
    })?;

    Ok(Config {
        endpoint: key_values.remove("endpoint"),
        access_key: Some(access_key),
        ..Default::default()
    })
}

fn parse_into_key_values(conn_str: &str) -> Result<HashMap<String, String>> {
    conn_str
        .trim()
        .replace('\n', "")
        .split(';')
        .filter(|&field| !field.trim().is_empty())
        .map(|field| {
            let (key, value) = field.trim().split_once('=').ok_or_else(|| {
                Error::config_invalid(format!(
                    "invalid connection string, expected '=' in field: {field}"
                ))
            })?;
            Ok((key.trim().to_ascii_lowercase(), value.trim().to_string()))
        })
        .collect()
}
