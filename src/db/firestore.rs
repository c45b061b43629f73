// SPDX-License-Identifier: MIT

//! Firestore backend with typed operations.
//!
//! Documents are stored with camelCase field names (the serde wire shape),
//! so transform field paths below use the serialized names.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Inquiry, Membership, Program, User};
use firestore::errors::FirestoreError;

/// Firestore client wrapper.
#[derive(Clone)]
pub(crate) struct FirestoreClient {
    client: firestore::FirestoreDb,
}

impl FirestoreClient {
    /// Connect to Firestore.
    pub(crate) async fn connect(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::connect_emulator(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn connect_emulator(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self { client })
    }

    // ─── User Operations ─────────────────────────────────────────

    pub(crate) async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .insert()
            .into(collections::USERS)
            .document_id(&user.email)
            .object(user)
            .execute()
            .await
            .map_err(|e| match e {
                FirestoreError::DataConflictError(_) => AppError::Conflict,
                other => AppError::Database(other.to_string()),
            })?;
        Ok(())
    }

    pub(crate) async fn get_user(&self, email: &str) -> Result<Option<User>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(email)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    pub(crate) async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.email)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    pub(crate) async fn add_purchased_program(
        &self,
        email: &str,
        program_id: &str,
    ) -> Result<(), AppError> {
        let result: Result<(), FirestoreError> = async {
            let writer = self.client.create_simple_batch_writer().await?;
            let mut batch = writer.new_batch();
            self.client
                .fluent()
                .update()
                .in_col(collections::USERS)
                .document_id(email)
                .transforms(|t| {
                    t.fields([t
                        .field("purchasedPrograms")
                        .append_missing_elements([program_id.to_string()])])
                })
                .only_transform()
                .add_to_batch(&mut batch)?;
            batch.write().await?;
            Ok(())
        }
        .await;

        match result {
            Ok(()) => Ok(()),
            // Purchase against a vanished user record is a no-op, matching
            // the in-memory backend.
            Err(FirestoreError::DataNotFoundError(_)) => Ok(()),
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    // ─── Program Operations ──────────────────────────────────────

    pub(crate) async fn list_programs(&self) -> Result<Vec<Program>, AppError> {
        self.client
            .fluent()
            .select()
            .from(collections::PROGRAMS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    pub(crate) async fn upsert_program(&self, program: &Program) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collections::PROGRAMS)
            .document_id(&program.id)
            .object(program)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Inquiry Operations ──────────────────────────────────────

    pub(crate) async fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .insert()
            .into(collections::INQUIRIES)
            .document_id(&inquiry.id)
            .object(inquiry)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Membership Operations ───────────────────────────────────

    pub(crate) async fn insert_membership(&self, membership: &Membership) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .insert()
            .into(collections::MEMBERSHIPS)
            .document_id(&membership.id)
            .object(membership)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
