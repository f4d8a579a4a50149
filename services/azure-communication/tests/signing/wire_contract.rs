use super::{expected_signature, init_signer, test_time, TEST_ACCESS_KEY};
use anyhow::Result;
use bytes::Bytes;
use hmacsign_core::time::parse_http_date;
use hmacsign_core::ErrorKind;
use http::header::AUTHORIZATION;
use http_body_util::{BodyExt, Empty, Full};
use pretty_assertions::assert_eq;
use test_case::test_case;

const DATE: &str = "Mon, 02 Jan 2006 15:04:05 GMT";

#[test_case("GET", "https://example.com/x", "/x", "example.com", b""; "get without query")]
#[test_case(
    "POST",
    "https://acs.communication.azure.com/emails:send?api-version=2023-03-31",
    "/emails:send?api-version=2023-03-31",
    "acs.communication.azure.com",
    b"{\"senderAddress\":\"a@b.c\"}";
    "post email"
)]
#[test_case(
    "post",
    "https://acs.communication.azure.com/sms?api-version=2021-03-07",
    "/sms?api-version=2021-03-07",
    "acs.communication.azure.com",
    b"{\"from\":\"+1\"}";
    "lowercase method"
)]
#[test_case(
    "GET",
    "http://localhost:8080/emails/abc%2Fdef/status?api-version=2023-03-31&x=%20",
    "/emails/abc%2Fdef/status?api-version=2023-03-31&x=%20",
    "localhost:8080",
    b"";
    "encoded path and query kept verbatim"
)]
#[tokio::test]
async fn test_signature_matches_verifier(
    method: &str,
    uri: &str,
    path_and_query: &str,
    host: &str,
    body: &'static [u8],
) -> Result<()> {
    let signer = init_signer(TEST_ACCESS_KEY);

    let req = http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Full::new(Bytes::from_static(body)))?;
    let req = signer.sign_request(req).await?;

    let (content_hash, signature) =
        expected_signature(TEST_ACCESS_KEY, method, path_and_query, host, DATE, body);

    assert_eq!(req.headers()["x-ms-content-sha256"], content_hash.as_str());
    assert_eq!(req.headers()["x-ms-date"], DATE);
    assert_eq!(
        req.headers()[AUTHORIZATION],
        format!(
            "HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature={signature}"
        )
        .as_str()
    );
    let signed_body = req.into_body().collect().await?.to_bytes();
    assert_eq!(signed_body, Bytes::from_static(body));
    Ok(())
}

#[tokio::test]
async fn test_empty_key_end_to_end() -> Result<()> {
    let signer = init_signer("");

    let req = http::Request::get("https://example.com/x").body(Empty::<Bytes>::new())?;
    let req = signer.sign_request(req).await?;

    assert_eq!(
        req.headers()["x-ms-content-sha256"],
        "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
    );
    assert_eq!(
        req.headers()[AUTHORIZATION],
        "HMAC-SHA256 SignedHeaders=x-ms-date;host;x-ms-content-sha256&Signature=5coQcol5XXaoGIsIYFVhRUtkP1TQKakQLi11phB+JLs="
    );
    assert!(req.into_body().collect().await?.to_bytes().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_date_header_is_http_date() -> Result<()> {
    let signer = init_signer(TEST_ACCESS_KEY);

    let req = http::Request::get("https://example.com/x").body(Empty::<Bytes>::new())?;
    let req = signer.sign_request(req).await?;

    let date = parse_http_date(req.headers()["x-ms-date"].to_str()?)?;
    assert_eq!(date, test_time());
    Ok(())
}

#[tokio::test]
async fn test_resigning_replaces_headers() -> Result<()> {
    let signer = init_signer(TEST_ACCESS_KEY);

    let req = http::Request::put("https://example.com/x").body(Full::new(Bytes::from("v1")))?;
    let req = signer.sign_request(req).await?;
    let first = req.headers()[AUTHORIZATION].clone();

    let req = signer.sign_request(req).await?;
    assert_eq!(req.headers().get_all(AUTHORIZATION).iter().count(), 1);
    assert_eq!(req.headers().get_all("x-ms-date").iter().count(), 1);
    assert_eq!(req.headers()[AUTHORIZATION], first);
    assert_eq!(req.into_body().collect().await?.to_bytes(), Bytes::from("v1"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_access_key() -> Result<()> {
    let signer = init_signer("not!base64");

    let mut parts = http::Request::get("https://example.com/x")
        .body(())?
        .into_parts()
        .0;
    let err = signer.sign(&mut parts, b"").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(parts.headers.is_empty());
    Ok(())
}
