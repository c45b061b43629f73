// SPDX-License-Identifier: MIT

//! Membership creation route.

use axum::{extract::State, http::StatusCode, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Membership, MembershipTier, PaymentStatus};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;

/// Fixed membership window. Not configurable.
const MEMBERSHIP_DAYS: i64 = 30;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/memberships", post(create_membership))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipRequest {
    pub plan_type: MembershipTier,
    pub amount: f64,
}

#[derive(Serialize)]
pub struct CreateMembershipResponse {
    pub message: String,
    pub membership: Membership,
}

/// Create a membership for the current user.
///
/// Payment status starts (and stays) `pending`; the user's tier is
/// overwritten to the new plan unconditionally, with no payment gate and no
/// record of the previous tier.
async fn create_membership(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateMembershipRequest>,
) -> Result<(StatusCode, Json<CreateMembershipResponse>)> {
    let mut user = state
        .db
        .get_user(&auth.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    let now = chrono::Utc::now();
    let membership = Membership {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user.id.clone(),
        plan_type: request.plan_type,
        start_date: format_utc_rfc3339(now),
        end_date: format_utc_rfc3339(now + chrono::Duration::days(MEMBERSHIP_DAYS)),
        is_active: true,
        payment_status: PaymentStatus::Pending,
        amount: request.amount,
    };

    state.db.insert_membership(&membership).await?;

    user.membership_type = request.plan_type;
    state.db.upsert_user(&user).await?;

    tracing::info!(
        user_id = %user.id,
        plan = ?request.plan_type,
        "Membership created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateMembershipResponse {
            message: "Membership created successfully".to_string(),
            membership,
        }),
    ))
}
