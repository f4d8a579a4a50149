use crate::body::{read_body, BodyReadPolicy};
use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use http_body::Body;
use http_body_util::Full;
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    body_policy: BodyReadPolicy,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            body_policy: BodyReadPolicy::default(),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the credential provider of this signer.
    ///
    /// The cached credential is dropped.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.loader = Arc::new(provider);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    /// Decide how body read failures are handled by [`Signer::sign_request`].
    pub fn with_body_read_policy(mut self, policy: BodyReadPolicy) -> Self {
        self.body_policy = policy;
        self
    }

    /// Signing request parts whose body is already in memory.
    ///
    /// `body` must be the exact bytes that will be sent.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let cred = self.credential.lock().expect("lock poisoned").clone();
        let cred = if cred.is_valid() {
            cred
        } else {
            let cred = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = cred.clone();
            cred
        };

        self.builder
            .sign_request(&self.ctx, req, body, cred.as_ref())
            .await
    }

    /// Drain the body, sign the request and return it with a re-readable body.
    ///
    /// The returned body holds exactly the bytes that were signed, so the
    /// request can be sent as is or signed again.
    pub async fn sign_request<B>(
        &self,
        req: http::Request<B>,
    ) -> Result<http::Request<Full<Bytes>>>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let (mut parts, body) = req.into_parts();
        let body = read_body(body, self.body_policy).await?;

        self.sign(&mut parts, &body).await?;
        Ok(http::Request::from_parts(parts, Full::new(body)))
    }
}
