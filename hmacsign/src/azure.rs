//! Azure Communication Services support with convenience APIs
//!
//! This module provides Azure Communication Services signing functionality
//! along with convenience functions for common use cases.

// Re-export all Azure Communication Services signing types
pub use hmacsign_azure_communication::*;

use crate::{default_context, Signer};

/// Default Azure Communication Services Signer type.
pub type DefaultSigner = Signer<Credential>;

/// Create a default Azure Communication Services signer.
///
/// This function creates a signer with:
/// - Default context (OS environment, system clock)
/// - Default credential provider (access key or connection string from env)
/// - Request signer for the HMAC-SHA256 scheme
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> hmacsign::Result<()> {
/// let signer = hmacsign::azure::default_signer();
///
/// let req = http::Request::get(
///     "https://my-resource.communication.azure.com/emails/operations/id?api-version=2023-03-31",
/// )
/// .body(http_body_util::Empty::<bytes::Bytes>::new())?;
///
/// let req = signer.sign_request(req).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Customization
///
/// ```no_run
/// use hmacsign::azure::{default_signer, StaticCredentialProvider};
///
/// let signer = default_signer()
///     .with_credential_provider(StaticCredentialProvider::new("c2VjcmV0LWtleQ=="));
/// ```
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new();
    Signer::new(ctx, provider, signer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http_body_util::{BodyExt, Full};

    #[tokio::test]
    async fn test_default_signer_with_static_key() {
        let signer = default_signer().with_credential_provider(StaticCredentialProvider::new(""));

        let req = http::Request::get("https://example.com/x")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let req = signer.sign_request(req).await.unwrap();

        assert!(req.headers().contains_key("x-ms-date"));
        assert_eq!(
            req.headers()["x-ms-content-sha256"],
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
        assert!(req.headers()["authorization"]
            .to_str()
            .unwrap()
            .starts_with("HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature="));
    }

    #[tokio::test]
    async fn test_default_signer_resigns_its_output() {
        let signer = default_signer()
            .with_credential_provider(StaticCredentialProvider::new("c2VjcmV0LWtleQ=="));

        let req = http::Request::post("https://example.com/sms?api-version=2021-03-07")
            .body(Full::new(Bytes::from_static(b"{}")))
            .unwrap();
        let req = signer.sign_request(req).await.unwrap();
        let req = signer.sign_request(req).await.unwrap();

        assert_eq!(req.headers().get_all("authorization").iter().count(), 1);
        let body = req.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from_static(b"{}"));
    }
}
