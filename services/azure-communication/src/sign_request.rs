use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use hmacsign_core::hash::{base64_decode, base64_hmac_sha256, base64_sha256};
use hmacsign_core::time::{format_http_date, DateTime};
use hmacsign_core::{Context, Error, Result, SignRequest, SigningRequest};
use http::request::Parts;
use http::{header, HeaderMap, HeaderValue};
use log::debug;

/// RequestSigner that implements Azure Communication Services HMAC authentication.
///
/// Every signed request carries three headers:
///
/// - `x-ms-content-sha256`: base64 SHA-256 of the body
/// - `x-ms-date`: the signing time as an HTTP date
/// - `Authorization`: `HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature=<signature>`
///
/// - [Sign an HTTP request](https://learn.microsoft.com/en-us/azure/communication-services/tutorials/hmac-header-tutorial)
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new signer for Azure Communication Services.
    pub fn new() -> Self {
        Self {}
    }

    /// Compute the signed headers for `req` without touching it.
    ///
    /// Fails if `access_key` is not valid base64.
    pub fn build_headers(
        &self,
        access_key: &str,
        req: &SigningRequest,
        body: &[u8],
        now: DateTime,
    ) -> Result<HeaderMap> {
        let key = base64_decode(access_key).map_err(|e| {
            Error::credential_invalid("failed to decode access key").with_source(e)
        })?;

        let timestamp = format_http_date(now);
        let content_hash = base64_sha256(body);
        let string_to_sign = string_to_sign(req, &timestamp, &content_hash);
        let signature = base64_hmac_sha256(&key, string_to_sign.as_bytes());

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(X_MS_CONTENT_SHA256, content_hash.parse()?);
        headers.insert(X_MS_DATE, timestamp.parse()?);
        headers.insert(header::AUTHORIZATION, {
            let mut value: HeaderValue =
                format!("{HMAC_SHA256} SignedHeaders={SIGNED_HEADERS}&Signature={signature}")
                    .parse()?;
            value.set_sensitive(true);
            value
        });

        Ok(headers)
    }

    /// Sign request parts with a base64 encoded access key.
    ///
    /// Headers are only written if signing succeeds.
    pub fn sign_parts(
        &self,
        ctx: &Context,
        access_key: &str,
        req: &mut Parts,
        body: &[u8],
    ) -> Result<()> {
        let signing = SigningRequest::build(req)?;
        let headers = self.build_headers(access_key, &signing, body, ctx.now())?;

        SigningRequest::apply(headers, req);
        Ok(())
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_missing("credential is required"));
        };

        self.sign_parts(ctx, &cred.access_key, req, body)
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// UPPER(VERB) + "\n" +
/// Path + ["?" + RawQuery] + "\n" +
/// x-ms-date + ";" + Host + ";" + x-ms-content-sha256
/// ```
pub fn string_to_sign(req: &SigningRequest, timestamp: &str, content_hash: &str) -> String {
    let path_and_query = req.path_and_query();
    let host = req.host();
    let method = req.method_uppercase();

    let mut s = String::with_capacity(
        method.len() + path_and_query.len() + timestamp.len() + host.len() + content_hash.len() + 4,
    );
    s.push_str(&method);
    s.push('\n');
    s.push_str(&path_and_query);
    s.push('\n');
    s.push_str(timestamp);
    s.push(';');
    s.push_str(host);
    s.push(';');
    s.push_str(content_hash);

    debug!("string to sign: {}", &s);

    s
}
