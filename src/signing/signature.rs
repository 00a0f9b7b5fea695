//! HMAC-SHA1 request signatures.
//!
//! The string to sign is four newline-separated lines:
//!
//! ```text
//! PUT
//! /users/1/transactions/abc?type=DEBIT&sessionId=s1
//! <base64 sha1 of the JSON body, or empty>
//! Sun, 06 Nov 1994 08:49:37 GMT
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha1::{Digest, Sha1};

use crate::http::request::{serialize_body, HttpMethod};

type HmacSha1 = Hmac<Sha1>;

/// Render a timestamp as an RFC 7231 IMF-fixdate.
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Build the canonical string that gets signed.
pub fn string_to_sign(method: HttpMethod, path: &str, body_hash: &str, date: &str) -> String {
    [method.as_str(), path, body_hash, date].join("\n")
}

/// Base64 SHA1 digest of a serialized body; empty when there is no body.
fn body_hash(serialized: Option<&str>) -> String {
    match serialized {
        Some(body) => BASE64.encode(Sha1::digest(body.as_bytes())),
        None => String::new(),
    }
}

fn hmac_base64(message: &str, secret_key: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes()).expect("HMAC can take any size");
    mac.update(message.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Sign a request whose body has already been serialized to its wire form.
///
/// `serialized` must be exactly the bytes that go on the wire.
pub fn sign_serialized(
    method: HttpMethod,
    path: &str,
    serialized: Option<&str>,
    date: &str,
    secret_key: &str,
) -> String {
    let hash = body_hash(serialized);
    hmac_base64(&string_to_sign(method, path, &hash, date), secret_key)
}

/// Sign a request.
///
/// The body only contributes to the signature for methods other than GET.
pub fn sign(
    method: HttpMethod,
    path: &str,
    body: Option<&Value>,
    date: &str,
    secret_key: &str,
) -> String {
    let serialized = serialize_body(method, body);
    sign_serialized(method, path, serialized.as_deref(), date, secret_key)
}

/// Value for the `Authorization` header.
pub fn authorization_header(access_id: &str, signature: &str) -> String {
    format!("OW {}:{}", access_id, signature)
}
