use async_trait::async_trait;

use crate::authenticator::{
    AuthenticatorError, CreatedCredential, CredentialCreationRequest, PlatformAuthenticator,
};
use crate::ceremony::errors::CeremonyError;
use crate::ceremony::types::{
    AttestationPayload, CeremonyOutcome, RegistrationOptions, RegistrationPayload,
};
use crate::utils::{base64url_decode, base64url_encode};

use super::flow::{Ceremony, CeremonyKind};
use super::transport::CeremonyApi;

/// The registration ceremony: enroll a new platform credential for the
/// logged-in user.
pub(crate) struct RegistrationCeremony;

impl RegistrationCeremony {
    fn decode(options: RegistrationOptions) -> Result<CredentialCreationRequest, CeremonyError> {
        let challenge = base64url_decode(&options.challenge)?;
        let user_id = base64url_decode(&options.user.id)?;
        Ok(CredentialCreationRequest {
            challenge,
            user_id,
            user: options.user.extra,
            parameters: options.parameters,
        })
    }

    fn payload(credential: CreatedCredential) -> RegistrationPayload {
        RegistrationPayload {
            id: credential.id,
            raw_id: base64url_encode(credential.raw_id),
            type_: credential.credential_type,
            response: AttestationPayload {
                client_data_json: base64url_encode(credential.client_data_json),
                attestation_object: base64url_encode(credential.attestation_object),
            },
        }
    }
}

#[async_trait]
impl Ceremony for RegistrationCeremony {
    type Prepared = CredentialCreationRequest;
    type Signed = CreatedCredential;
    type Outcome = CeremonyOutcome;

    const KIND: CeremonyKind = CeremonyKind::Registration;

    async fn begin(&self, api: &dyn CeremonyApi) -> Result<Self::Prepared, CeremonyError> {
        let options = api.begin_registration().await?;
        tracing::debug!("Registration options received");
        Self::decode(options)
    }

    async fn invoke(
        &self,
        authenticator: &dyn PlatformAuthenticator,
        prepared: Self::Prepared,
    ) -> Result<Self::Signed, AuthenticatorError> {
        tracing::debug!("Requesting credential creation from the authenticator");
        authenticator.create_credential(prepared).await
    }

    async fn submit(
        &self,
        api: &dyn CeremonyApi,
        signed: Self::Signed,
    ) -> Result<Self::Outcome, CeremonyError> {
        let payload = Self::payload(signed);
        tracing::debug!("Submitting created credential");
        api.complete_registration(&payload).await
    }
}
