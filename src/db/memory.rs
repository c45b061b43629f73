// SPDX-License-Identifier: MIT

//! In-memory backend for local development and tests.
//!
//! One `DashMap` per collection. Per-record atomicity comes from the map's
//! shard locks: `entry`/`get_mut` hold the record's shard for the duration
//! of the mutation, so the purchase set-insert cannot lose updates.

use crate::error::AppError;
use crate::models::{Inquiry, Membership, Program, User};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

#[derive(Default)]
pub(crate) struct MemoryStore {
    users: DashMap<String, User>,
    programs: DashMap<String, Program>,
    inquiries: DashMap<String, Inquiry>,
    memberships: DashMap<String, Membership>,
}

impl MemoryStore {
    pub(crate) fn insert_user(&self, user: &User) -> Result<(), AppError> {
        match self.users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(())
            }
        }
    }

    pub(crate) fn get_user(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(email).map(|u| u.clone()))
    }

    pub(crate) fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        self.users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    pub(crate) fn add_purchased_program(
        &self,
        email: &str,
        program_id: &str,
    ) -> Result<(), AppError> {
        if let Some(mut user) = self.users.get_mut(email) {
            if !user.purchased_programs.iter().any(|p| p == program_id) {
                user.purchased_programs.push(program_id.to_string());
            }
        }
        Ok(())
    }

    pub(crate) fn list_programs(&self) -> Result<Vec<Program>, AppError> {
        let mut programs: Vec<Program> = self
            .programs
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        programs.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(programs)
    }

    pub(crate) fn upsert_program(&self, program: &Program) -> Result<(), AppError> {
        self.programs.insert(program.id.clone(), program.clone());
        Ok(())
    }

    pub(crate) fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError> {
        self.inquiries.insert(inquiry.id.clone(), inquiry.clone());
        Ok(())
    }

    pub(crate) fn insert_membership(&self, membership: &Membership) -> Result<(), AppError> {
        self.memberships
            .insert(membership.id.clone(), membership.clone());
        Ok(())
    }
}
