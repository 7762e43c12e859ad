use std::sync::Arc;

use async_trait::async_trait;

use crate::authenticator::{AuthenticatorError, PlatformAuthenticator};
use crate::ceremony::errors::CeremonyError;

use super::capability::CapabilityState;
use super::transport::CeremonyApi;

/// Which ceremony is running. The control flow is identical for both; only
/// the payload shapes differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CeremonyKind {
    Registration,
    Authentication,
}

/// Progress of one ceremony attempt. Terminal states are final: there is no
/// retry loop, and a new caller invocation starts a fresh attempt at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CeremonyState {
    Idle,
    AwaitingAuthenticator,
    Submitting,
    Succeeded,
    Failed,
}

/// One ceremony variant: how to fetch-and-decode the options, what to ask
/// the authenticator, and how to encode-and-submit its output.
///
/// The shared invariants live in [`drive`], not in implementations: the
/// capability gate runs before any network traffic, binary fields are
/// decoded before the authenticator sees them and re-encoded before
/// submission, and authenticator failures cross the classification boundary
/// exactly once.
#[async_trait]
pub(crate) trait Ceremony: Send + Sync {
    type Prepared: Send;
    type Signed: Send;
    type Outcome: Send;

    const KIND: CeremonyKind;

    /// Fetch the ceremony options and decode their binary fields.
    async fn begin(&self, api: &dyn CeremonyApi) -> Result<Self::Prepared, CeremonyError>;

    /// Hand the decoded descriptor to the authenticator. The suspension here
    /// is bounded only by the user interaction; no internal timeout applies.
    async fn invoke(
        &self,
        authenticator: &dyn PlatformAuthenticator,
        prepared: Self::Prepared,
    ) -> Result<Self::Signed, AuthenticatorError>;

    /// Encode the authenticator's output and submit it for verification.
    async fn submit(
        &self,
        api: &dyn CeremonyApi,
        signed: Self::Signed,
    ) -> Result<Self::Outcome, CeremonyError>;
}

/// Runs one ceremony attempt end to end:
/// Idle → Awaiting-Authenticator → Submitting → Succeeded | Failed.
pub(crate) async fn drive<C: Ceremony>(
    ceremony: &C,
    capability: &CapabilityState,
    api: &dyn CeremonyApi,
    authenticator: Option<&Arc<dyn PlatformAuthenticator>>,
) -> Result<C::Outcome, CeremonyError> {
    let mut state = CeremonyState::Idle;

    // Gate before any network traffic.
    let authenticator = match authenticator {
        Some(a) if capability.ceremony_permitted() => a.as_ref(),
        _ => {
            transition(C::KIND, &mut state, CeremonyState::Failed);
            return Err(CeremonyError::UnsupportedDevice);
        }
    };

    let result = run(ceremony, api, authenticator, &mut state).await;
    match &result {
        Ok(_) => transition(C::KIND, &mut state, CeremonyState::Succeeded),
        Err(e) => {
            tracing::error!("{:?} ceremony failed: {}", C::KIND, e);
            transition(C::KIND, &mut state, CeremonyState::Failed);
        }
    }
    result
}

async fn run<C: Ceremony>(
    ceremony: &C,
    api: &dyn CeremonyApi,
    authenticator: &dyn PlatformAuthenticator,
    state: &mut CeremonyState,
) -> Result<C::Outcome, CeremonyError> {
    let prepared = ceremony.begin(api).await?;
    transition(C::KIND, state, CeremonyState::AwaitingAuthenticator);

    let signed = ceremony.invoke(authenticator, prepared).await?;
    transition(C::KIND, state, CeremonyState::Submitting);

    ceremony.submit(api, signed).await
}

fn transition(kind: CeremonyKind, state: &mut CeremonyState, next: CeremonyState) {
    tracing::debug!("{:?} ceremony: {:?} -> {:?}", kind, *state, next);
    *state = next;
}
