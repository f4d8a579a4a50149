use crate::{Error, Result};
use http::HeaderMap;
use http::Method;

/// Signing context for request.
///
/// SigningRequest is an immutable snapshot of the parts of a request that
/// are covered by a signature. Building it never mutates the original request,
/// signers compute new headers from it and merge them back afterwards.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// Host and optional `:port`, without userinfo.
    ///
    /// This is what a server sees in the `Host` header.
    pub host: String,
    /// HTTP path, as written in the request.
    ///
    /// Percent-encoding is kept (`/a%20b` stays `/a%20b`) instead of signing
    /// the decoded path, so the signed bytes are the ones on the request line.
    pub path: String,
    /// Raw HTTP query, kept verbatim.
    ///
    /// `None` if the request has no query or an empty one.
    pub query: Option<String>,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &http::request::Parts) -> Result<Self> {
        let uri = &parts.uri;

        let host = uri.host().ok_or_else(|| {
            Error::request_invalid("request without authority is invalid for signing")
        })?;
        let host = match uri.port_u16() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        Ok(SigningRequest {
            method: parts.method.clone(),
            host,
            path: uri.path().to_string(),
            query: uri
                .query()
                .filter(|q| !q.is_empty())
                .map(|q| q.to_string()),
        })
    }

    /// Host used in signatures, including the port if the request carries one.
    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path followed by `?query` when a query is present.
    pub fn path_and_query(&self) -> String {
        match &self.query {
            None => self.path.clone(),
            Some(query) => {
                let mut s = String::with_capacity(self.path.len() + query.len() + 1);
                s.push_str(&self.path);
                s.push('?');
                s.push_str(query);
                s
            }
        }
    }

    /// Upper-cased method name.
    ///
    /// `http::Method` keeps extension methods like `post` as written, so we
    /// normalize here instead of relying on the parsed value.
    pub fn method_uppercase(&self) -> String {
        self.method.as_str().to_ascii_uppercase()
    }

    /// Merge signed headers back into the request.
    ///
    /// Existing headers with the same name are replaced.
    pub fn apply(signed: HeaderMap, parts: &mut http::request::Parts) {
        for (name, value) in signed {
            if let Some(name) = name {
                parts.headers.insert(name, value);
            }
        }
    }
}
