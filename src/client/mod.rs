// SPDX-License-Identifier: MIT

//! Member-facing client library: typed API client, persisted session store,
//! and the auth form controller with its client-side validation rules.

pub mod api;
pub mod forms;
pub mod session;

pub use api::{ApiClient, ClientError};
pub use forms::{AuthFormController, AuthMode};
pub use session::{FileStorage, KeyValueStorage, MemoryStorage, SessionStore};
