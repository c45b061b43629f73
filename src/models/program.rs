// SPDX-License-Identifier: MIT

//! Program catalog models. The catalog is read-only from the API's
//! perspective; entries are curated out of band.

use serde::{Deserialize, Serialize};

/// Catalog entry, keyed by its externally assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: String,
    pub price: f64,
    pub instructor: Instructor,
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub experience: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// Weekly schedule slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: String,
    pub time: String,
    pub spots: u32,
    pub focus: String,
}
