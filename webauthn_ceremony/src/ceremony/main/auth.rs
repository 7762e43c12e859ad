use async_trait::async_trait;

use crate::authenticator::{
    AllowedCredential, AssertionRequest, AuthenticatorError, CredentialAssertion,
    PlatformAuthenticator,
};
use crate::ceremony::errors::CeremonyError;
use crate::ceremony::types::{
    AssertionPayload, AssertionResponsePayload, AuthenticationOptions,
};
use crate::utils::{base64url_decode, base64url_encode};

use super::flow::{Ceremony, CeremonyKind};
use super::transport::CeremonyApi;

/// The authentication ceremony: assert a previously registered credential
/// for the account identified by email.
pub(crate) struct AuthenticationCeremony {
    pub(crate) email: String,
}

impl AuthenticationCeremony {
    fn decode(options: AuthenticationOptions) -> Result<AssertionRequest, CeremonyError> {
        let challenge = base64url_decode(&options.challenge)?;

        // An absent list means any credential for this relying party.
        let allow_credentials = match options.allow_credentials {
            Some(descriptors) => {
                let mut decoded = Vec::with_capacity(descriptors.len());
                for descriptor in descriptors {
                    decoded.push(AllowedCredential {
                        id: base64url_decode(&descriptor.id)?,
                        credential_type: descriptor.type_,
                        extra: descriptor.extra,
                    });
                }
                Some(decoded)
            }
            None => None,
        };

        Ok(AssertionRequest {
            challenge,
            allow_credentials,
            parameters: options.parameters,
        })
    }

    fn payload(&self, assertion: CredentialAssertion) -> AssertionPayload {
        AssertionPayload {
            id: assertion.id,
            raw_id: base64url_encode(assertion.raw_id),
            type_: assertion.credential_type,
            response: AssertionResponsePayload {
                client_data_json: base64url_encode(assertion.client_data_json),
                authenticator_data: base64url_encode(assertion.authenticator_data),
                signature: base64url_encode(assertion.signature),
                user_handle: assertion.user_handle.map(|handle| base64url_encode(handle)),
            },
            email: self.email.clone(),
        }
    }
}

#[async_trait]
impl Ceremony for AuthenticationCeremony {
    type Prepared = AssertionRequest;
    type Signed = CredentialAssertion;
    type Outcome = serde_json::Value;

    const KIND: CeremonyKind = CeremonyKind::Authentication;

    async fn begin(&self, api: &dyn CeremonyApi) -> Result<Self::Prepared, CeremonyError> {
        let options = api.begin_authentication(&self.email).await?;
        tracing::debug!("Authentication options received");
        Self::decode(options)
    }

    async fn invoke(
        &self,
        authenticator: &dyn PlatformAuthenticator,
        prepared: Self::Prepared,
    ) -> Result<Self::Signed, AuthenticatorError> {
        tracing::debug!("Requesting assertion from the authenticator");
        authenticator.get_assertion(prepared).await
    }

    async fn submit(
        &self,
        api: &dyn CeremonyApi,
        signed: Self::Signed,
    ) -> Result<Self::Outcome, CeremonyError> {
        let payload = self.payload(signed);
        tracing::debug!("Submitting assertion");
        api.complete_authentication(&payload).await
    }
}
