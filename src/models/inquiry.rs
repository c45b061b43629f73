// SPDX-License-Identifier: MIT

//! Contact inquiry model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryCategory {
    General,
    Membership,
    Program,
    Support,
}

impl Default for InquiryCategory {
    fn default() -> Self {
        InquiryCategory::General
    }
}

/// Triage state. New inquiries start as `new`; the core flows never
/// transition them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    New,
    InProgress,
    Resolved,
}

/// A stored contact-form submission awaiting administrative triage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(rename = "type")]
    pub category: InquiryCategory,
    pub status: InquiryStatus,
    pub created_at: String,
}
