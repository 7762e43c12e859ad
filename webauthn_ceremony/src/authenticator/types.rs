use serde_json::{Map, Value};

/// Decoded descriptor for a credential-creation ceremony.
///
/// The challenge and user identifier have already been converted from the
/// transport text form to raw bytes; everything else the server issued is
/// passed through untouched.
#[derive(Debug, Clone)]
pub struct CredentialCreationRequest {
    pub challenge: Vec<u8>,
    pub user_id: Vec<u8>,
    /// Remaining user-entity fields as issued (`name`, `displayName`, ...).
    pub user: Map<String, Value>,
    /// Remaining creation parameters as issued (`rp`, `pubKeyCredParams`,
    /// `authenticatorSelection`, `timeout`, `attestation`, ...).
    pub parameters: Map<String, Value>,
}

/// Decoded descriptor for an assertion ceremony.
#[derive(Debug, Clone)]
pub struct AssertionRequest {
    pub challenge: Vec<u8>,
    /// Acceptable credentials, each identifier decoded. `None` means any
    /// credential for this relying party may answer.
    pub allow_credentials: Option<Vec<AllowedCredential>>,
    /// Remaining request parameters as issued (`rpId`, `userVerification`,
    /// `timeout`, ...).
    pub parameters: Map<String, Value>,
}

/// One entry of an allow-credentials list, identifier decoded.
#[derive(Debug, Clone)]
pub struct AllowedCredential {
    pub id: Vec<u8>,
    pub credential_type: String,
    /// Remaining descriptor fields as issued (`transports`, ...).
    pub extra: Map<String, Value>,
}

/// A newly created credential as returned by the authenticator.
#[derive(Debug, Clone)]
pub struct CreatedCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub credential_type: String,
    pub client_data_json: Vec<u8>,
    pub attestation_object: Vec<u8>,
}

/// A signed assertion as returned by the authenticator.
#[derive(Debug, Clone)]
pub struct CredentialAssertion {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub credential_type: String,
    pub client_data_json: Vec<u8>,
    pub authenticator_data: Vec<u8>,
    pub signature: Vec<u8>,
    /// Absent when the authenticator does not disclose a user handle.
    pub user_handle: Option<Vec<u8>>,
}
