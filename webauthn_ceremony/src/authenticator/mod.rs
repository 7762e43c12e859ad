mod errors;
mod types;

pub use errors::AuthenticatorError;
pub use types::{
    AllowedCredential, AssertionRequest, CreatedCredential, CredentialAssertion,
    CredentialCreationRequest,
};

use async_trait::async_trait;

/// A device-resident verifying authenticator (Face ID, Touch ID, Windows
/// Hello, a security key in platform mode, ...).
///
/// The ceremony orchestrator treats implementations as an external
/// capability: it hands over a fully decoded creation/request descriptor,
/// suspends for as long as the user interaction takes, and receives either a
/// signed credential or an [`AuthenticatorError`] describing why the
/// interaction ended. No timeout is imposed on these calls; bounding them is
/// the caller's business.
#[async_trait]
pub trait PlatformAuthenticator: Send + Sync {
    /// Whether a user-verifying platform authenticator is present on this
    /// device. Queried once per client by the capability probe.
    async fn is_available(&self) -> Result<bool, AuthenticatorError>;

    /// Create a new credential, prompting the user to enroll. Returns the
    /// attested credential on success.
    async fn create_credential(
        &self,
        request: CredentialCreationRequest,
    ) -> Result<CreatedCredential, AuthenticatorError>;

    /// Produce an assertion over the given challenge with a previously
    /// registered credential, prompting the user to verify.
    async fn get_assertion(
        &self,
        request: AssertionRequest,
    ) -> Result<CredentialAssertion, AuthenticatorError>;
}
