use thiserror::Error;

use crate::authenticator::AuthenticatorError;
use crate::utils::UtilError;

/// Terminal failure taxonomy for a ceremony.
///
/// This is what the embedding UI sees when a ceremony fails. The variants
/// are stable; the display string of each is the user-facing message. The
/// classification never changes control flow, only the message attached to
/// the terminal failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CeremonyError {
    /// No platform authenticator on this device, or the credential API is
    /// absent from the host environment.
    #[error("Face ID/Touch ID is not supported on this device.")]
    UnsupportedDevice,

    /// The user declined or dismissed the authenticator prompt.
    #[error("Operation was cancelled or not allowed.")]
    UserCancelled,

    /// The host context does not meet the credential API's security policy.
    #[error("Security error. Please make sure you're using HTTPS.")]
    InsecureContext,

    /// The authenticator already holds a credential for this account.
    #[error("An authenticator is already registered for this account.")]
    AlreadyRegistered,

    /// The authenticator cannot satisfy the requested parameters.
    #[error("The authenticator does not meet the requirements.")]
    ConstraintViolation,

    /// The verification service rejected a begin or complete call; carries
    /// the server-supplied message verbatim.
    #[error("{0}")]
    ServerRejected(String),

    /// Fallback; carries the raw message when one exists.
    #[error("{}", .0.as_deref().unwrap_or("An unknown error occurred."))]
    Unknown(Option<String>),
}

impl CeremonyError {
    /// The message to show the user for this terminal failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Classifies an authenticator failure signal into the stable taxonomy.
impl From<AuthenticatorError> for CeremonyError {
    fn from(err: AuthenticatorError) -> Self {
        match err {
            AuthenticatorError::NotAllowed(_) | AuthenticatorError::Aborted(_) => {
                Self::UserCancelled
            }
            AuthenticatorError::NotSupported(_) => Self::UnsupportedDevice,
            AuthenticatorError::Security(_) => Self::InsecureContext,
            AuthenticatorError::InvalidState(_) => Self::AlreadyRegistered,
            AuthenticatorError::Constraint(_) => Self::ConstraintViolation,
            AuthenticatorError::Other(msg) => Self::Unknown(Some(msg)),
        }
    }
}

impl From<UtilError> for CeremonyError {
    fn from(err: UtilError) -> Self {
        Self::Unknown(Some(err.to_string()))
    }
}
