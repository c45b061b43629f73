// SPDX-License-Identifier: MIT

//! Profile routes for authenticated members.

use axum::{extract::State, routing::get, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{ProfileResponse, UserProfile};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user/profile", get(get_profile).put(update_profile))
        .route("/api/user/programs", get(get_purchased_programs))
}

/// Get the current user's full profile (minus the password hash).
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .db
        .get_user(&auth.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    Ok(Json(ProfileResponse::from(user)))
}

/// Partial profile update. Only the fields listed here are updatable;
/// anything else in the payload — the password in particular — is dropped
/// before it can touch the stored record.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub profile: Option<UserProfile>,
}

#[derive(Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: ProfileResponse,
}

/// Apply a partial update to the current user's profile.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut user = state
        .db
        .get_user(&auth.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    if let Some(first_name) = request.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = request.last_name {
        user.last_name = last_name;
    }
    if let Some(phone) = request.phone {
        user.phone = if phone.is_empty() { None } else { Some(phone) };
    }
    if let Some(profile) = request.profile {
        user.profile = Some(profile);
    }

    state.db.upsert_user(&user).await?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: ProfileResponse::from(user),
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedProgramsResponse {
    pub purchased_programs: Vec<String>,
}

/// List the program ids the current user has purchased.
async fn get_purchased_programs(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<PurchasedProgramsResponse>> {
    let user = state
        .db
        .get_user(&auth.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    Ok(Json(PurchasedProgramsResponse {
        purchased_programs: user.purchased_programs,
    }))
}
