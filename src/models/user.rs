//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// Membership tier, stored per user. Not historized: creating a membership
/// overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    Basic,
    Premium,
    Elite,
}

impl Default for MembershipTier {
    fn default() -> Self {
        MembershipTier::Basic
    }
}

/// User document. Keyed by email in the store, so email uniqueness is a
/// property of the collection itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Generated UUID, the JWT subject
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Email address (document key, normalized by the client at write time)
    pub email: String,
    /// Bcrypt hash. Never serialized into an API response type.
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub membership_type: MembershipTier,
    /// When the user registered (RFC3339)
    pub join_date: String,
    pub is_active: bool,
    /// Purchased program ids: unique, unordered
    #[serde(default)]
    pub purchased_programs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

/// Optional fitness profile sub-record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub fitness_goals: Vec<String>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
}

/// Compact user view returned from register/login, cached by the client
/// session store. Registration omits `purchasedPrograms`; login includes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub membership_type: MembershipTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_programs: Option<Vec<String>>,
}

impl UserSummary {
    /// Summary for a freshly registered user.
    pub fn registered(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            membership_type: user.membership_type,
            purchased_programs: None,
        }
    }

    /// Summary for a logged-in user, including their purchases.
    pub fn logged_in(user: &User) -> Self {
        Self {
            purchased_programs: Some(user.purchased_programs.clone()),
            ..Self::registered(user)
        }
    }
}

/// Full user record minus the password hash, for the profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub membership_type: MembershipTier,
    pub join_date: String,
    pub is_active: bool,
    pub purchased_programs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            membership_type: user.membership_type,
            join_date: user.join_date,
            is_active: user.is_active,
            purchased_programs: user.purchased_programs,
            profile: user.profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: "u-1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            password: "$2b$12$hash".to_string(),
            phone: None,
            membership_type: MembershipTier::Basic,
            join_date: "2026-01-01T00:00:00Z".to_string(),
            is_active: true,
            purchased_programs: vec![],
            profile: None,
        }
    }

    #[test]
    fn test_tier_serde_shape() {
        assert_eq!(
            serde_json::to_string(&MembershipTier::Elite).unwrap(),
            "\"elite\""
        );
        let tier: MembershipTier = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(tier, MembershipTier::Premium);
    }

    #[test]
    fn test_profile_response_excludes_password() {
        let json = serde_json::to_value(ProfileResponse::from(test_user())).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["membershipType"], "basic");
        assert_eq!(json["firstName"], "Jane");
    }

    #[test]
    fn test_summary_shapes() {
        let user = test_user();
        let registered = serde_json::to_value(UserSummary::registered(&user)).unwrap();
        assert!(registered.get("purchasedPrograms").is_none());

        let logged_in = serde_json::to_value(UserSummary::logged_in(&user)).unwrap();
        assert_eq!(logged_in["purchasedPrograms"], serde_json::json!([]));
    }
}
