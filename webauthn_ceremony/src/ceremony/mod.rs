mod config;
mod errors;
mod main;
mod types;

pub use errors::CeremonyError;

pub use main::{CapabilityState, CeremonyClient, CookieHeaderCsrf, CsrfTokenSource, HttpTransport};

pub use types::{
    AuthenticationOptions, CeremonyOutcome, CredentialStatus, LoginOutcome, RegistrationOptions,
};
