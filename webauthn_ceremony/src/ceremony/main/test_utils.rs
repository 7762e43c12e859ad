use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::authenticator::{
    AssertionRequest, AuthenticatorError, CreatedCredential, CredentialAssertion,
    CredentialCreationRequest, PlatformAuthenticator,
};
use crate::ceremony::errors::CeremonyError;
use crate::ceremony::types::{
    AssertionPayload, AuthenticationOptions, CeremonyOutcome, CredentialStatus,
    RegistrationOptions, RegistrationPayload,
};

use super::transport::CeremonyApi;

/// Which transport operations ran, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ApiCall {
    BeginRegistration,
    CompleteRegistration,
    BeginAuthentication,
    CompleteAuthentication,
    ProbeCredentialStatus,
}

/// In-memory [`CeremonyApi`] that records every call and the payloads it
/// was handed, serialized the way the wire would see them.
pub(crate) struct MockApi {
    pub(crate) calls: Mutex<Vec<ApiCall>>,
    pub(crate) begin_registration: Result<RegistrationOptions, CeremonyError>,
    pub(crate) begin_authentication: Result<AuthenticationOptions, CeremonyError>,
    pub(crate) registration_payloads: Mutex<Vec<Value>>,
    pub(crate) assertion_payloads: Mutex<Vec<Value>>,
    pub(crate) credential_status: Option<CredentialStatus>,
}

impl MockApi {
    pub(crate) fn new() -> Self {
        let registration_options = serde_json::from_value(json!({
            "challenge": "AAEC",
            "rp": {"name": "LouBot AI Assistant", "id": "localhost"},
            "user": {"id": "AQ", "name": "alice", "displayName": "Alice"},
            "pubKeyCredParams": [{"alg": -7, "type": "public-key"}],
            "timeout": 60000,
            "attestation": "none"
        }))
        .expect("static registration options");

        let authentication_options = serde_json::from_value(json!({
            "challenge": "AAEC",
            "timeout": 60000,
            "userVerification": "required",
            "rpId": "localhost"
        }))
        .expect("static authentication options");

        Self {
            calls: Mutex::new(Vec::new()),
            begin_registration: Ok(registration_options),
            begin_authentication: Ok(authentication_options),
            registration_payloads: Mutex::new(Vec::new()),
            assertion_payloads: Mutex::new(Vec::new()),
            credential_status: Some(CredentialStatus {
                has_credentials: true,
            }),
        }
    }

    pub(crate) fn with_registration_rejection(message: &str) -> Self {
        Self {
            begin_registration: Err(CeremonyError::ServerRejected(message.to_string())),
            ..Self::new()
        }
    }

    pub(crate) fn with_authentication_rejection(message: &str) -> Self {
        Self {
            begin_authentication: Err(CeremonyError::ServerRejected(message.to_string())),
            ..Self::new()
        }
    }

    pub(crate) fn recorded(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CeremonyApi for MockApi {
    async fn begin_registration(&self) -> Result<RegistrationOptions, CeremonyError> {
        self.record(ApiCall::BeginRegistration);
        self.begin_registration.clone()
    }

    async fn complete_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<CeremonyOutcome, CeremonyError> {
        self.record(ApiCall::CompleteRegistration);
        self.registration_payloads
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload).unwrap());
        Ok(CeremonyOutcome {
            success: true,
            message: Some("Face ID/Touch ID registration successful!".to_string()),
        })
    }

    async fn begin_authentication(
        &self,
        _email: &str,
    ) -> Result<AuthenticationOptions, CeremonyError> {
        self.record(ApiCall::BeginAuthentication);
        self.begin_authentication.clone()
    }

    async fn complete_authentication(
        &self,
        payload: &AssertionPayload,
    ) -> Result<Value, CeremonyError> {
        self.record(ApiCall::CompleteAuthentication);
        self.assertion_payloads
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload).unwrap());
        Ok(json!({
            "status": "success",
            "message": "Authentication successful!",
            "redirect": "/chat"
        }))
    }

    async fn probe_credential_status(&self) -> CredentialStatus {
        self.record(ApiCall::ProbeCredentialStatus);
        self.credential_status.clone().unwrap_or_default()
    }
}

/// Scripted authenticator: records the decoded requests it receives and
/// returns canned credentials, or a configured failure signal.
pub(crate) struct StubAuthenticator {
    pub(crate) available: bool,
    pub(crate) create_error: Option<AuthenticatorError>,
    pub(crate) assert_error: Option<AuthenticatorError>,
    pub(crate) user_handle: Option<Vec<u8>>,
    pub(crate) creation_requests: Mutex<Vec<CredentialCreationRequest>>,
    pub(crate) assertion_requests: Mutex<Vec<AssertionRequest>>,
}

impl StubAuthenticator {
    pub(crate) fn new() -> Self {
        Self {
            available: true,
            create_error: None,
            assert_error: None,
            user_handle: None,
            creation_requests: Mutex::new(Vec::new()),
            assertion_requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub(crate) fn failing_create(error: AuthenticatorError) -> Self {
        Self {
            create_error: Some(error),
            ..Self::new()
        }
    }

    pub(crate) fn failing_assert(error: AuthenticatorError) -> Self {
        Self {
            assert_error: Some(error),
            ..Self::new()
        }
    }
}

#[async_trait]
impl PlatformAuthenticator for StubAuthenticator {
    async fn is_available(&self) -> Result<bool, AuthenticatorError> {
        Ok(self.available)
    }

    async fn create_credential(
        &self,
        request: CredentialCreationRequest,
    ) -> Result<CreatedCredential, AuthenticatorError> {
        self.creation_requests.lock().unwrap().push(request);
        if let Some(error) = &self.create_error {
            return Err(error.clone());
        }
        Ok(CreatedCredential {
            id: "stub-credential".to_string(),
            raw_id: vec![9, 9, 9],
            credential_type: "public-key".to_string(),
            client_data_json: br#"{"type":"webauthn.create"}"#.to_vec(),
            attestation_object: vec![1, 2, 3],
        })
    }

    async fn get_assertion(
        &self,
        request: AssertionRequest,
    ) -> Result<CredentialAssertion, AuthenticatorError> {
        self.assertion_requests.lock().unwrap().push(request);
        if let Some(error) = &self.assert_error {
            return Err(error.clone());
        }
        Ok(CredentialAssertion {
            id: "stub-credential".to_string(),
            raw_id: vec![9, 9, 9],
            credential_type: "public-key".to_string(),
            client_data_json: br#"{"type":"webauthn.get"}"#.to_vec(),
            authenticator_data: vec![4, 5, 6],
            signature: vec![7, 8],
            user_handle: self.user_handle.clone(),
        })
    }
}

/// Authenticator whose availability query itself errors; the probe must
/// swallow this.
pub(crate) struct FailingProbeAuthenticator;

#[async_trait]
impl PlatformAuthenticator for FailingProbeAuthenticator {
    async fn is_available(&self) -> Result<bool, AuthenticatorError> {
        Err(AuthenticatorError::Other("probe exploded".to_string()))
    }

    async fn create_credential(
        &self,
        _request: CredentialCreationRequest,
    ) -> Result<CreatedCredential, AuthenticatorError> {
        Err(AuthenticatorError::Other("unreachable".to_string()))
    }

    async fn get_assertion(
        &self,
        _request: AssertionRequest,
    ) -> Result<CredentialAssertion, AuthenticatorError> {
        Err(AuthenticatorError::Other("unreachable".to_string()))
    }
}
