use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::authenticator::PlatformAuthenticator;
use crate::ceremony::types::{CeremonyOutcome, LoginOutcome};

use super::auth::AuthenticationCeremony;
use super::capability::{self, CapabilityState};
use super::flow::drive;
use super::register::RegistrationCeremony;
use super::transport::{CeremonyApi, HttpTransport};

/// Client-side coordinator for the credential ceremonies of one browser
/// session.
///
/// Construct one per session and share it; the capability probe runs once
/// and its result is cached for the client's lifetime. The ceremony entry
/// points never return an error: they always resolve to an outcome value,
/// with failures classified into a user-displayable message.
///
/// The client does not serialize overlapping ceremonies. Methods take
/// `&self` and keep no per-ceremony state, so concurrent invocations are
/// independent request cycles; a caller that wants at most one prompt at a
/// time must sequence the calls itself. There is likewise no internal
/// timeout: an authenticator interaction ends only when the user or the
/// authenticator ends it, and callers bounding a ceremony externally can
/// only abandon the future, not abort the interaction.
pub struct CeremonyClient {
    api: Arc<dyn CeremonyApi>,
    authenticator: Option<Arc<dyn PlatformAuthenticator>>,
    capability: OnceCell<CapabilityState>,
}

impl CeremonyClient {
    /// `authenticator` is `None` when the host environment has no platform
    /// credential API; every ceremony then fails as unsupported without
    /// touching the network.
    pub fn new(
        transport: HttpTransport,
        authenticator: Option<Arc<dyn PlatformAuthenticator>>,
    ) -> Self {
        Self::from_api(Arc::new(transport), authenticator)
    }

    pub(crate) fn from_api(
        api: Arc<dyn CeremonyApi>,
        authenticator: Option<Arc<dyn PlatformAuthenticator>>,
    ) -> Self {
        Self {
            api,
            authenticator,
            capability: OnceCell::new(),
        }
    }

    /// Resolves once the capability probe has run and returns the cached
    /// state, immutable for the life of the client. The ceremony entry
    /// points await this internally; callers need it only to gate their UI.
    pub async fn capability(&self) -> &CapabilityState {
        self.capability
            .get_or_init(|| capability::probe(self.authenticator.as_ref()))
            .await
    }

    /// Registers a new platform credential for the logged-in user.
    pub async fn setup_biometric_auth(&self) -> CeremonyOutcome {
        let capability = *self.capability().await;
        match drive(
            &RegistrationCeremony,
            &capability,
            self.api.as_ref(),
            self.authenticator.as_ref(),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(e) => CeremonyOutcome {
                success: false,
                message: Some(e.user_message()),
            },
        }
    }

    /// Authenticates the account identified by `email` with a previously
    /// registered credential. On success `result` carries the server's
    /// outcome object verbatim.
    pub async fn login_with_biometric(&self, email: &str) -> LoginOutcome {
        let capability = *self.capability().await;
        let ceremony = AuthenticationCeremony {
            email: email.to_string(),
        };
        match drive(
            &ceremony,
            &capability,
            self.api.as_ref(),
            self.authenticator.as_ref(),
        )
        .await
        {
            Ok(result) => LoginOutcome {
                success: true,
                result: Some(result),
                message: None,
            },
            Err(e) => LoginOutcome {
                success: false,
                result: None,
                message: Some(e.user_message()),
            },
        }
    }

    /// Whether the current account already has registered credentials.
    /// Advisory only: any transport failure reads as `false`.
    pub async fn has_credentials(&self) -> bool {
        self.api.probe_credential_status().await.has_credentials
    }
}
