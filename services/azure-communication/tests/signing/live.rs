use std::env;

use anyhow::Result;
use bytes::Bytes;
use hmacsign_azure_communication::{
    Config, Credential, DefaultCredentialProvider, RequestSigner,
};
use hmacsign_core::{Context, OsEnv, Signer};
use http::StatusCode;
use http_body_util::{BodyExt, Empty, Full};
use log::{debug, warn};
use reqwest::Client;

fn init_live_signer() -> Option<(Signer<Credential>, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("HMACSIGN_AZURE_COMMUNICATION_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new().with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    let endpoint = config
        .resolved_endpoint()
        .expect("connection string must be valid")
        .expect("env AZURE_COMMUNICATION_ENDPOINT or AZURE_COMMUNICATION_CONNECTION_STRING must set");

    let provider = DefaultCredentialProvider::builder()
        .with_config(config)
        .build();
    let signer = Signer::new(ctx, provider, RequestSigner::new());

    Some((signer, endpoint.trim_end_matches('/').to_string()))
}

/// Hand a signed request over to reqwest with the exact bytes that were signed.
async fn into_reqwest(req: http::Request<Full<Bytes>>) -> Result<reqwest::Request> {
    let (parts, body) = req.into_parts();
    let body = body.collect().await?.to_bytes();
    Ok(http::Request::from_parts(parts, body).try_into()?)
}

#[tokio::test]
async fn test_get_unknown_email_status() -> Result<()> {
    let Some((signer, endpoint)) = init_live_signer() else {
        warn!("HMACSIGN_AZURE_COMMUNICATION_TEST is not set, skipped");
        return Ok(());
    };

    let req = http::Request::get(format!(
        "{endpoint}/emails/operations/not-exist-operation?api-version=2023-03-31"
    ))
    .body(Empty::<Bytes>::new())?;
    let req = signer.sign_request(req).await?;
    debug!("signed request: {req:?}");

    let resp = Client::new().execute(into_reqwest(req).await?).await?;
    debug!("got response: {resp:?}");

    // Authentication passed, the operation just doesn't exist.
    assert_eq!(StatusCode::NOT_FOUND, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_wrong_key_is_rejected() -> Result<()> {
    let Some((signer, endpoint)) = init_live_signer() else {
        warn!("HMACSIGN_AZURE_COMMUNICATION_TEST is not set, skipped");
        return Ok(());
    };
    let signer = signer.with_credential_provider(
        hmacsign_azure_communication::StaticCredentialProvider::new("d3Jvbmcta2V5"),
    );

    let req = http::Request::get(format!(
        "{endpoint}/emails/operations/not-exist-operation?api-version=2023-03-31"
    ))
    .body(Empty::<Bytes>::new())?;
    let req = signer.sign_request(req).await?;

    let resp = Client::new().execute(into_reqwest(req).await?).await?;
    assert_eq!(StatusCode::UNAUTHORIZED, resp.status());
    Ok(())
}
