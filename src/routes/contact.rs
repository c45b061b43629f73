// SPDX-License-Identifier: MIT

//! Contact inquiry route.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Inquiry, InquiryCategory, InquiryStatus};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/contact", post(submit_inquiry))
}

#[derive(Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(rename = "type", default)]
    pub category: Option<InquiryCategory>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message: String,
    pub inquiry_id: String,
}

/// Store a contact-form submission for administrative triage. No dedup and
/// no rate limiting.
async fn submit_inquiry(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let inquiry = Inquiry {
        id: uuid::Uuid::new_v4().to_string(),
        name: request.name,
        email: request.email,
        phone: request.phone.filter(|p| !p.is_empty()),
        message: request.message,
        category: request.category.unwrap_or_default(),
        status: InquiryStatus::New,
        created_at: format_utc_rfc3339(chrono::Utc::now()),
    };

    state.db.insert_inquiry(&inquiry).await?;

    tracing::info!(inquiry_id = %inquiry.id, "Inquiry submitted");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: "Inquiry submitted successfully".to_string(),
            inquiry_id: inquiry.id,
        }),
    ))
}
