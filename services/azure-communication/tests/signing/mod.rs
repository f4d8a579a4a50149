use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use chrono::{TimeZone, Utc};
use hmac::{Hmac, Mac};
use hmacsign_azure_communication::{Credential, RequestSigner, StaticCredentialProvider};
use hmacsign_core::time::DateTime;
use hmacsign_core::{Context, FixedClock, Signer};
use sha2::{Digest, Sha256};

mod live;
mod wire_contract;

pub const TEST_ACCESS_KEY: &str = "c2VjcmV0LWtleQ==";

pub fn test_time() -> DateTime {
    Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()
}

pub fn init_signer(access_key: &str) -> Signer<Credential> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_clock(FixedClock(test_time()));
    Signer::new(
        ctx,
        StaticCredentialProvider::new(access_key),
        RequestSigner::new(),
    )
}

/// Recompute the signature the way a verifying server does.
pub fn expected_signature(
    access_key: &str,
    method: &str,
    path_and_query: &str,
    host: &str,
    date: &str,
    body: &[u8],
) -> (String, String) {
    let content_hash = BASE64_STANDARD.encode(Sha256::digest(body));
    let string_to_sign = format!(
        "{}\n{}\n{};{};{}",
        method.to_uppercase(),
        path_and_query,
        date,
        host,
        content_hash
    );

    let key = BASE64_STANDARD.decode(access_key).unwrap();
    let mut mac = Hmac::<Sha256>::new_from_slice(&key).unwrap();
    mac.update(string_to_sign.as_bytes());
    let signature = BASE64_STANDARD.encode(mac.finalize().into_bytes());

    (content_hash, signature)
}
