//! webauthn_ceremony - client-side coordinator for platform-authenticator
//! credential ceremonies.
//!
//! This crate drives the two-phase (begin/complete) protocol for credential
//! registration and authentication against a remote verification service,
//! performs the binary/text translation the protocol requires, and
//! classifies authenticator failures into a stable, user-displayable
//! taxonomy.
//!
//! The platform authenticator is an injected capability: embedders
//! implement [`PlatformAuthenticator`] over whatever credential API their
//! host exposes and hand it to [`CeremonyClient`]. The verification service
//! is consumed as a black-box request/response endpoint through
//! [`HttpTransport`]; the crate verifies no signatures and stores no
//! credentials.

mod authenticator;
mod ceremony;
mod utils;

pub use authenticator::{
    AllowedCredential, AssertionRequest, AuthenticatorError, CreatedCredential,
    CredentialAssertion, CredentialCreationRequest, PlatformAuthenticator,
};

pub use ceremony::{
    AuthenticationOptions, CapabilityState, CeremonyClient, CeremonyError, CeremonyOutcome,
    CookieHeaderCsrf, CredentialStatus, CsrfTokenSource, HttpTransport, LoginOutcome,
    RegistrationOptions,
};
