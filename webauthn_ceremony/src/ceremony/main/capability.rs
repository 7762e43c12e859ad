use std::sync::Arc;

use crate::authenticator::PlatformAuthenticator;

/// Capability flags for this session, computed once by the startup probe
/// and immutable afterwards.
///
/// Read through [`CeremonyClient::capability`](super::CeremonyClient::capability),
/// which awaits the probe; the flags cannot be observed before it resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapabilityState {
    /// The platform credential API exists in the host environment.
    pub supported: bool,
    /// A user-verifying platform authenticator is present on the device.
    pub platform_authenticator_available: bool,
}

impl CapabilityState {
    /// Whether ceremonies may be started at all.
    pub fn ceremony_permitted(&self) -> bool {
        self.supported && self.platform_authenticator_available
    }
}

/// Runs the one-shot capability probe. A missing authenticator means the
/// host has no credential API; an availability query failure downgrades to
/// "unavailable" rather than propagating, since capability detection must
/// never break startup.
pub(crate) async fn probe(
    authenticator: Option<&Arc<dyn PlatformAuthenticator>>,
) -> CapabilityState {
    let Some(authenticator) = authenticator else {
        tracing::debug!("No platform credential API in this environment");
        return CapabilityState {
            supported: false,
            platform_authenticator_available: false,
        };
    };

    let available = match authenticator.is_available().await {
        Ok(available) => available,
        Err(e) => {
            tracing::warn!("Error checking platform authenticator availability: {}", e);
            false
        }
    };

    tracing::debug!("Platform authenticator available: {}", available);

    CapabilityState {
        supported: true,
        platform_authenticator_available: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ceremony::main::test_utils::{FailingProbeAuthenticator, StubAuthenticator};

    /// Test the probe when no credential API exists in the host
    #[tokio::test]
    async fn test_probe_without_authenticator() {
        let state = probe(None).await;
        assert!(!state.supported);
        assert!(!state.platform_authenticator_available);
        assert!(!state.ceremony_permitted());
    }

    /// Test the probe against a present, available authenticator
    #[tokio::test]
    async fn test_probe_available() {
        let authenticator: Arc<dyn PlatformAuthenticator> = Arc::new(StubAuthenticator::new());
        let state = probe(Some(&authenticator)).await;
        assert!(state.supported);
        assert!(state.platform_authenticator_available);
        assert!(state.ceremony_permitted());
    }

    /// Test the probe when the API exists but no platform authenticator
    /// is present
    #[tokio::test]
    async fn test_probe_unavailable() {
        let authenticator: Arc<dyn PlatformAuthenticator> =
            Arc::new(StubAuthenticator::unavailable());
        let state = probe(Some(&authenticator)).await;
        assert!(state.supported);
        assert!(!state.platform_authenticator_available);
        assert!(!state.ceremony_permitted());
    }

    /// Test that an availability-query failure downgrades to unavailable
    /// instead of propagating
    #[tokio::test]
    async fn test_probe_failure_fails_soft() {
        let authenticator: Arc<dyn PlatformAuthenticator> = Arc::new(FailingProbeAuthenticator);
        let state = probe(Some(&authenticator)).await;
        assert!(state.supported);
        assert!(!state.platform_authenticator_available);
    }
}
