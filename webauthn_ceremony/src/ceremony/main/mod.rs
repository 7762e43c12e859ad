mod auth;
mod capability;
mod client;
mod flow;
mod register;
#[cfg(test)]
mod test_utils;
mod transport;

pub use capability::CapabilityState;
pub use client::CeremonyClient;
pub use transport::{CookieHeaderCsrf, CsrfTokenSource, HttpTransport};
