// SPDX-License-Identifier: MIT

//! Membership model linking a user to a plan.

use crate::models::user::MembershipTier;
use serde::{Deserialize, Serialize};

/// Stored payment state. Defaults to `pending`; nothing in the API
/// transitions it (payment processing is out of scope).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

/// A membership purchase. The window is a fixed 30 days from creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    pub user_id: String,
    pub plan_type: MembershipTier,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub payment_status: PaymentStatus,
    pub amount: f64,
}
