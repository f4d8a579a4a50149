//! Azure Communication Services signer
//!
//! This crate signs requests to Azure Communication Services (email, SMS and
//! the other data-plane APIs) with the resource access key, using the
//! HMAC-SHA256 scheme:
//!
//! ```text
//! x-ms-content-sha256: base64(SHA256(body))
//! x-ms-date: Mon, 02 Jan 2006 15:04:05 GMT
//! Authorization: HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature=<signature>
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bytes::Bytes;
//! use hmacsign_azure_communication::{DefaultCredentialProvider, RequestSigner};
//! use hmacsign_core::{Context, OsEnv, Result, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!
//!     // Reads AZURE_COMMUNICATION_ACCESS_KEY or AZURE_COMMUNICATION_CONNECTION_STRING.
//!     let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!
//!     let req = http::Request::post(
//!         "https://my-resource.communication.azure.com/emails:send?api-version=2023-03-31",
//!     )
//!     .header("content-type", "application/json")
//!     .body(http_body_util::Full::new(Bytes::from_static(b"{}")))?;
//!
//!     // The returned request carries the signed headers and the signed bytes.
//!     let req = signer.sign_request(req).await?;
//!     println!("signed: {:?}", req.headers());
//!
//!     Ok(())
//! }
//! ```

mod constants;

mod config;
pub use config::Config;

mod connection_string;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{string_to_sign, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
