//! Draining request bodies before signing.
//!
//! Signatures that cover the payload need the whole body in memory. The body
//! is collected once and handed back as [`Bytes`], which can be read any
//! number of times by both the signer and the transport.

use crate::{Error, Result};
use bytes::Bytes;
use http_body::Body;
use http_body_util::BodyExt;
use log::warn;

/// BodyReadPolicy decides what happens when a body fails to be drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyReadPolicy {
    /// Sign the request as if it had no body.
    ///
    /// Verifiers that accept this behavior will see an empty payload, so the
    /// transport must send an empty body as well.
    #[default]
    Lenient,
    /// Return the read error and leave the request unsigned.
    Strict,
}

/// Read the entire body into memory.
///
/// With [`BodyReadPolicy::Lenient`], a failed read yields an empty body.
pub async fn read_body<B>(body: B, policy: BodyReadPolicy) -> Result<Bytes>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match body.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) => {
            let err: Box<dyn std::error::Error + Send + Sync> = err.into();
            let err = anyhow::anyhow!(err);
            match policy {
                BodyReadPolicy::Lenient => {
                    warn!("failed to read request body, signing as empty: {err:?}");
                    Ok(Bytes::new())
                }
                BodyReadPolicy::Strict => {
                    Err(Error::body_unreadable("failed to read request body").with_source(err))
                }
            }
        }
    }
}
