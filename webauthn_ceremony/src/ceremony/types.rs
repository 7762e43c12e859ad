use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope around the server's begin responses (`{status, options}`); only
/// the options are consumed.
#[derive(Debug, Deserialize)]
pub(crate) struct BeginResponse<T> {
    pub(crate) options: T,
}

/// Server-issued options for a registration ceremony.
///
/// Only the fields the client must rewrite (challenge, user identifier) are
/// typed; everything else the server issued stays opaque and is handed to
/// the authenticator untouched. Challenge and identifier arrive as URL-safe
/// unpadded base64 text and are decoded before the authenticator sees them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOptions {
    pub(crate) challenge: String,
    pub(crate) user: UserEntity,
    #[serde(flatten)]
    pub(crate) parameters: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserEntity {
    pub(crate) id: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

/// Server-issued options for an authentication ceremony.
///
/// `allow_credentials` is optional; when absent, any credential for this
/// relying party may answer and no list decoding happens.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationOptions {
    pub(crate) challenge: String,
    #[serde(default)]
    pub(crate) allow_credentials: Option<Vec<AllowCredentialDescriptor>>,
    #[serde(flatten)]
    pub(crate) parameters: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AllowCredentialDescriptor {
    #[serde(rename = "type")]
    pub(crate) type_: String,
    pub(crate) id: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

/// Submission payload for the registration completion call. Every buffer
/// from the authenticator is re-encoded to the transport text form before
/// this is built.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistrationPayload {
    pub(crate) id: String,
    pub(crate) raw_id: String,
    #[serde(rename = "type")]
    pub(crate) type_: String,
    pub(crate) response: AttestationPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttestationPayload {
    #[serde(rename = "clientDataJSON")]
    pub(crate) client_data_json: String,
    pub(crate) attestation_object: String,
}

/// Submission payload for the authentication completion call. Carries the
/// original email so the server can correlate the lookup it performed at
/// begin time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssertionPayload {
    pub(crate) id: String,
    pub(crate) raw_id: String,
    #[serde(rename = "type")]
    pub(crate) type_: String,
    pub(crate) response: AssertionResponsePayload,
    pub(crate) email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssertionResponsePayload {
    #[serde(rename = "clientDataJSON")]
    pub(crate) client_data_json: String,
    pub(crate) authenticator_data: String,
    pub(crate) signature: String,
    /// Explicit JSON `null` when the authenticator omitted it; the field is
    /// never skipped.
    pub(crate) user_handle: Option<String>,
}

/// Body of a successful registration completion (`{status, message}`).
#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    pub(crate) message: Option<String>,
}

/// Advisory result of the credential-status probe. Defaults to "no
/// credentials" because the probe fails soft.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CredentialStatus {
    #[serde(default)]
    pub has_credentials: bool,
}

/// Terminal result of a registration ceremony, shaped for the UI. Never
/// carries an error; failures arrive as `success: false` plus a message.
#[derive(Debug, Clone, PartialEq)]
pub struct CeremonyOutcome {
    pub success: bool,
    pub message: Option<String>,
}

/// Terminal result of an authentication ceremony. On success `result`
/// holds the server's outcome object verbatim (message, redirect, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub success: bool,
    pub result: Option<Value>,
    pub message: Option<String>,
}
