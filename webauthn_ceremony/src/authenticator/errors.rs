use thiserror::Error;

/// Failure signals an authenticator can raise.
///
/// The variants mirror the failure names the platform credential API
/// reports, so implementations wrapping a browser or OS authenticator can
/// map one-to-one. The ceremony layer classifies these into user-facing
/// outcomes; it never branches on them.
#[derive(Debug, Error, Clone)]
pub enum AuthenticatorError {
    /// The user declined, dismissed the prompt, or the operation timed out
    /// at the authenticator.
    #[error("Operation not allowed: {0}")]
    NotAllowed(String),

    /// The requested credential type or algorithm is not supported here.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// The operation was refused for policy reasons, typically an insecure
    /// (non-HTTPS) context.
    #[error("Security error: {0}")]
    Security(String),

    /// A credential already exists for one of the excluded/known identifiers.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The authenticator cannot satisfy the requested selection criteria.
    #[error("Constraint not satisfied: {0}")]
    Constraint(String),

    /// The interaction was aborted before the user finished.
    #[error("Aborted: {0}")]
    Aborted(String),

    /// Anything the authenticator could not name more precisely.
    #[error("{0}")]
    Other(String),
}
