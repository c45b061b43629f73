// SPDX-License-Identifier: MIT

//! Typed HTTP client for the FitZone API.

use crate::models::{Membership, MembershipTier, ProfileResponse, UserProfile, UserSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Client-side error. `Api` carries the structured `error` code from the
/// response body when the server sent one; the message text is kept for the
/// substring fallback in the form controller's classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
    message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Successful register/login response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSuccess {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdated {
    pub message: String,
    pub user: ProfileResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedPrograms {
    pub purchased_programs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquirySubmitted {
    pub message: String,
    pub inquiry_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPayload {
    pub plan_type: MembershipTier,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MembershipCreated {
    pub message: String,
    pub membership: Membership,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// FitZone API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against a server base URL (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        decode(response).await
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<AuthSuccess, ClientError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn login(&self, payload: &LoginPayload) -> Result<AuthSuccess, ClientError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn profile(&self, token: &str) -> Result<ProfileResponse, ClientError> {
        let response = self
            .http
            .get(self.url("/user/profile"))
            .bearer_auth(token)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_profile(
        &self,
        token: &str,
        payload: &UpdateProfilePayload,
    ) -> Result<ProfileUpdated, ClientError> {
        let response = self
            .http
            .put(self.url("/user/profile"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn programs(&self) -> Result<Vec<crate::models::Program>, ClientError> {
        let response = self.http.get(self.url("/programs")).send().await?;
        decode(response).await
    }

    pub async fn purchase_program(
        &self,
        token: &str,
        program_id: &str,
    ) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/programs/{}/purchase", program_id)))
            .bearer_auth(token)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn purchased_programs(&self, token: &str) -> Result<PurchasedPrograms, ClientError> {
        let response = self
            .http
            .get(self.url("/user/programs"))
            .bearer_auth(token)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_membership(
        &self,
        token: &str,
        payload: &MembershipPayload,
    ) -> Result<MembershipCreated, ClientError> {
        let response = self
            .http
            .post(self.url("/memberships"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn submit_inquiry(
        &self,
        payload: &InquiryPayload,
    ) -> Result<InquirySubmitted, ClientError> {
        let response = self
            .http
            .post(self.url("/contact"))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }
}

/// Decode a success body, or turn an error status into `ClientError::Api`,
/// keeping the structured code when the body parses.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => Err(ClientError::Api {
            status: status.as_u16(),
            code: Some(body.error),
            message: body.message,
        }),
        Err(_) => Err(ClientError::Api {
            status: status.as_u16(),
            code: None,
            message: if text.is_empty() {
                "API request failed".to_string()
            } else {
                text
            },
        }),
    }
}
