// SPDX-License-Identifier: MIT

//! FitZone: gym membership and program API.
//!
//! This crate provides the backend API for member registration, login,
//! profile management, the program catalog, purchases, memberships and
//! contact inquiries — plus the member-facing client library (API client,
//! persisted session store, and auth form controller).

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::Db;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
}
