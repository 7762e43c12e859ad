use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use http::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::ceremony::config::{CSRF_COOKIE_NAME, HTTP_TIMEOUT, WEBAUTHN_ROUTE_PREFIX};
use crate::ceremony::errors::CeremonyError;
use crate::ceremony::types::{
    AssertionPayload, AuthenticationOptions, BeginResponse, CeremonyOutcome, CompletionResponse,
    CredentialStatus, RegistrationOptions, RegistrationPayload,
};
use crate::utils::cookie_value;

const CSRF_HEADER: &str = "X-CSRFToken";

/// Source of the anti-forgery token attached to every ceremony POST.
///
/// The original reads `document.cookie`; embedders supply whatever cookie
/// access their host environment has. An empty token is attached when the
/// source has none.
pub trait CsrfTokenSource: Send + Sync {
    fn csrf_token(&self) -> Option<String>;
}

/// [`CsrfTokenSource`] over a request-header snapshot: looks up the
/// configured cookie in the `Cookie` header.
pub struct CookieHeaderCsrf {
    headers: HeaderMap,
}

impl CookieHeaderCsrf {
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }
}

impl CsrfTokenSource for CookieHeaderCsrf {
    fn csrf_token(&self) -> Option<String> {
        cookie_value(&self.headers, CSRF_COOKIE_NAME.as_str())
    }
}

/// The four ceremony calls plus the advisory status probe, as the fixed
/// endpoint contract defines them. Crate-private seam so the orchestrator
/// can be exercised without a live server.
#[async_trait]
pub(crate) trait CeremonyApi: Send + Sync {
    async fn begin_registration(&self) -> Result<RegistrationOptions, CeremonyError>;

    async fn complete_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<CeremonyOutcome, CeremonyError>;

    async fn begin_authentication(
        &self,
        email: &str,
    ) -> Result<AuthenticationOptions, CeremonyError>;

    async fn complete_authentication(
        &self,
        payload: &AssertionPayload,
    ) -> Result<serde_json::Value, CeremonyError>;

    /// Fail-soft: any failure reads as "no credentials".
    async fn probe_credential_status(&self) -> CredentialStatus;
}

/// HTTP transport against the verification service.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    csrf: Arc<dyn CsrfTokenSource>,
}

impl HttpTransport {
    /// `base_url` is the origin the verification service is reachable at;
    /// the endpoint paths are fixed by the protocol contract.
    pub fn new(base_url: &str, csrf: Arc<dyn CsrfTokenSource>) -> Result<Self, CeremonyError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CeremonyError::Unknown(Some(format!("Invalid base URL: {e}"))))?;
        Ok(Self {
            client: build_client(),
            base_url,
            csrf,
        })
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            WEBAUTHN_ROUTE_PREFIX.as_str(),
            suffix
        )
    }

    async fn post_json<B, T>(&self, suffix: &str, body: Option<&B>) -> Result<T, CeremonyError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(suffix);
        tracing::debug!("POST {}", url);

        let token = self.csrf.csrf_token().unwrap_or_default();
        let mut request = self.client.post(&url).header(CSRF_HEADER, token);
        request = match body {
            Some(body) => request.json(body),
            None => request.json(&serde_json::json!({})),
        };

        let response = request
            .send()
            .await
            .map_err(|e| CeremonyError::Unknown(Some(format!("Request failed: {e}"))))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let rejection = rejection_from_response(status, &body);
            tracing::error!("POST {} rejected: {}", url, rejection);
            return Err(rejection);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CeremonyError::Unknown(Some(format!("Invalid response body: {e}"))))
    }
}

fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(*HTTP_TIMEOUT))
        .build()
        .expect("Failed to create reqwest client")
}

/// Decodes a non-success response body (`{error}`) into the server-rejected
/// failure, with a generic fallback when the message is absent or the body
/// unparseable.
fn rejection_from_response(status: reqwest::StatusCode, body: &str) -> CeremonyError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    CeremonyError::ServerRejected(message)
}

#[async_trait]
impl CeremonyApi for HttpTransport {
    async fn begin_registration(&self) -> Result<RegistrationOptions, CeremonyError> {
        let response: BeginResponse<RegistrationOptions> = self
            .post_json::<serde_json::Value, _>("/register/begin", None)
            .await?;
        Ok(response.options)
    }

    async fn complete_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<CeremonyOutcome, CeremonyError> {
        let response: CompletionResponse = self.post_json("/register/complete", Some(payload)).await?;
        Ok(CeremonyOutcome {
            success: true,
            message: response.message,
        })
    }

    async fn begin_authentication(
        &self,
        email: &str,
    ) -> Result<AuthenticationOptions, CeremonyError> {
        let body = serde_json::json!({ "email": email });
        let response: BeginResponse<AuthenticationOptions> =
            self.post_json("/auth/begin", Some(&body)).await?;
        Ok(response.options)
    }

    async fn complete_authentication(
        &self,
        payload: &AssertionPayload,
    ) -> Result<serde_json::Value, CeremonyError> {
        self.post_json("/auth/complete", Some(payload)).await
    }

    async fn probe_credential_status(&self) -> CredentialStatus {
        let url = self.endpoint("/check-support");
        let result = async {
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<CredentialStatus>()
                .await
        }
        .await;

        match result {
            Ok(status) => status,
            Err(e) => {
                tracing::debug!("Credential status probe failed: {}", e);
                CredentialStatus::default()
            }
        }
    }
}
