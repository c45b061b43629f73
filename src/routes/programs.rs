// SPDX-License-Identifier: MIT

//! Program catalog routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::Program;
use crate::AppState;

/// Public catalog routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/programs", get(list_programs))
}

/// Routes requiring authentication (applied in routes/mod.rs).
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/programs/{program_id}/purchase", post(purchase_program))
}

/// List the full program catalog.
async fn list_programs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Program>>> {
    let programs = state.db.list_programs().await?;
    Ok(Json(programs))
}

#[derive(Serialize)]
pub struct PurchaseResponse {
    pub message: String,
}

/// Record a program purchase for the current user.
///
/// This is a catalog unlock, not a payment: the program id is added to the
/// user's purchase set with an atomic set-insert, so repeating the purchase
/// is a no-op rather than an error or a duplicate.
async fn purchase_program(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(program_id): Path<String>,
) -> Result<Json<PurchaseResponse>> {
    state
        .db
        .add_purchased_program(&auth.email, &program_id)
        .await?;

    tracing::info!(user_id = %auth.user_id, program_id = %program_id, "Program purchased");

    Ok(Json(PurchaseResponse {
        message: "Program purchased successfully".to_string(),
    }))
}
