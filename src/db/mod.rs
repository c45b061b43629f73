// SPDX-License-Identifier: MIT

//! Database layer: typed document-store operations.
//!
//! Two backends share one interface: Firestore for deployments (emulator
//! supported via `FIRESTORE_EMULATOR_HOST`) and an in-memory store for local
//! development and tests. Users are keyed by email, which makes email
//! uniqueness a property of the store rather than a handler-level check.

pub mod firestore;
pub mod memory;

use crate::error::AppError;
use crate::models::{Inquiry, Membership, Program, User};
use std::sync::Arc;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const PROGRAMS: &str = "programs";
    pub const INQUIRIES: &str = "inquiries";
    pub const MEMBERSHIPS: &str = "memberships";
}

/// Document store handle shared across handlers.
#[derive(Clone)]
pub struct Db {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreClient),
    Memory(Arc<memory::MemoryStore>),
}

impl Db {
    /// Connect to Firestore.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn connect(project_id: &str) -> Result<Self, AppError> {
        let client = firestore::FirestoreClient::connect(project_id).await?;
        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create an in-memory store (local development and tests).
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(memory::MemoryStore::default())),
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Create a user. Fails with `Conflict` if a user with the same email
    /// already exists — enforced atomically by the store.
    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(fs) => fs.insert_user(user).await,
            Backend::Memory(mem) => mem.insert_user(user),
        }
    }

    /// Get a user by email (the document key).
    pub async fn get_user(&self, email: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(fs) => fs.get_user(email).await,
            Backend::Memory(mem) => mem.get_user(email),
        }
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(fs) => fs.upsert_user(user).await,
            Backend::Memory(mem) => mem.upsert_user(user),
        }
    }

    /// Add a program id to a user's purchase set if not already present.
    ///
    /// Atomic at the record level (set-insert, not read-modify-write), so
    /// concurrent purchases by the same user cannot lose updates. A repeat
    /// purchase is a no-op.
    pub async fn add_purchased_program(
        &self,
        email: &str,
        program_id: &str,
    ) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(fs) => fs.add_purchased_program(email, program_id).await,
            Backend::Memory(mem) => mem.add_purchased_program(email, program_id),
        }
    }

    // ─── Program Operations ──────────────────────────────────────

    /// List the full program catalog, ordered by id.
    pub async fn list_programs(&self) -> Result<Vec<Program>, AppError> {
        match &self.backend {
            Backend::Firestore(fs) => fs.list_programs().await,
            Backend::Memory(mem) => mem.list_programs(),
        }
    }

    /// Create or update a catalog entry (out-of-band curation and tests).
    pub async fn upsert_program(&self, program: &Program) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(fs) => fs.upsert_program(program).await,
            Backend::Memory(mem) => mem.upsert_program(program),
        }
    }

    // ─── Inquiry Operations ──────────────────────────────────────

    /// Store a contact inquiry.
    pub async fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(fs) => fs.insert_inquiry(inquiry).await,
            Backend::Memory(mem) => mem.insert_inquiry(inquiry),
        }
    }

    // ─── Membership Operations ───────────────────────────────────

    /// Store a membership record.
    pub async fn insert_membership(&self, membership: &Membership) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(fs) => fs.insert_membership(membership).await,
            Backend::Memory(mem) => mem.insert_membership(membership),
        }
    }
}
