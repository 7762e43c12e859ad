use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use headers::{Cookie, HeaderMapExt};
use http::HeaderMap;
use thiserror::Error;

/// Decodes the transport text form (URL-safe base64, no padding) into raw bytes.
///
/// Challenge and identifier fields arrive from the server in this form and must
/// be converted to binary before they reach the authenticator. Trailing `=` is
/// tolerated so padded-equivalent input decodes as well.
pub(crate) fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(input.trim_end_matches('='))
        .map_err(|_| UtilError::Format("Failed to decode base64url".to_string()))?;
    Ok(decoded)
}

/// Encodes raw bytes into the transport text form (URL-safe base64, no padding).
pub(crate) fn base64url_encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Looks up a cookie by name in a `Cookie` request header.
pub(crate) fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .typed_get::<Cookie>()
        .and_then(|cookies| cookies.get(name).map(|v| v.to_string()))
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Invalid format: {0}")]
    Format(String),
}
