//! Signing API requests with a shared secret.
//!
//! `hmacsign` re-exports [`hmacsign_core`] and the service signers behind
//! cargo features:
//!
//! - `azure`: Azure Communication Services HMAC-SHA256 signing
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> hmacsign::Result<()> {
//! let signer = hmacsign::azure::default_signer();
//!
//! let req = http::Request::post(
//!     "https://my-resource.communication.azure.com/sms?api-version=2021-03-07",
//! )
//! .body(http_body_util::Full::new(bytes::Bytes::from_static(b"{}")))?;
//!
//! let req = signer.sign_request(req).await?;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use hmacsign_core::*;

mod context;
pub use context::default_context;

#[cfg(feature = "azure")]
pub mod azure;
