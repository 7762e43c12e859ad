use std::{env, sync::LazyLock};

/// Path prefix the verification service mounts the ceremony endpoints under.
pub(super) static WEBAUTHN_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    match env::var("WEBAUTHN_ROUTE_PREFIX").ok() {
        None => "/webauthn".to_string(),
        Some(v) if v.starts_with('/') => v.trim_end_matches('/').to_string(),
        Some(invalid) => {
            tracing::warn!(
                "Invalid route prefix: {}. Using default '/webauthn'",
                invalid
            );
            "/webauthn".to_string()
        }
    }
});

/// Name of the cookie carrying the anti-forgery token. The default matches
/// the verification service's framework cookie.
pub(super) static CSRF_COOKIE_NAME: LazyLock<String> =
    LazyLock::new(|| env::var("WEBAUTHN_CSRF_COOKIE").unwrap_or_else(|_| "csrftoken".to_string()));

/// Per-request network timeout in seconds. This bounds the transport calls
/// only; authenticator interactions are never timed out here.
pub(super) static HTTP_TIMEOUT: LazyLock<u64> = LazyLock::new(|| {
    env::var("WEBAUTHN_HTTP_TIMEOUT")
        .map(|v| v.parse::<u64>().unwrap_or(30))
        .unwrap_or(30)
});
