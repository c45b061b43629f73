// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod inquiry;
pub mod membership;
pub mod program;
pub mod user;

pub use inquiry::{Inquiry, InquiryCategory, InquiryStatus};
pub use membership::{Membership, PaymentStatus};
pub use program::{Instructor, Program, ScheduleSlot};
pub use user::{MembershipTier, ProfileResponse, User, UserProfile, UserSummary};
