//! Data model and wire payloads for the authentication subsystem. The cached
//! session snapshot reuses the wire casing so a stored `User` round-trips
//! unchanged. Recovery and verification secrets pass through these payloads
//! and must never be logged.

use serde::{Deserialize, Serialize};

/// The authenticated principal. An empty `id` means "no authenticated user";
/// `verified` and `label` derive from the account record, everything else from
/// the profile record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub bio: String,
    pub verified: bool,
    pub label: String,
}

impl User {
    /// Whether this value is the "no authenticated user" sentinel.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Merges an account and its profile record into a single `User`.
    pub fn from_parts(profile: Profile, account: &Account) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            username: profile.username,
            email: profile.email,
            image_url: profile.image_url,
            bio: profile.bio,
            verified: account.verified,
            label: account.labels.first().cloned().unwrap_or_default(),
        }
    }
}

/// In-memory authentication state. Mutated only by the session state manager;
/// guards and UI consumers read it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: User,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Account record as returned by the identity service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Profile record stored alongside the account, keyed by account id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub bio: String,
}

/// Credential session issued by the identity service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
}

/// Confirmation returned by recovery/verification issuance and redemption.
/// `user_id` is the opaque identifier the service reports on success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub user_id: String,
}

/// Sign-up form input.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSessionRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateRecoveryRequest<'a> {
    pub email: &'a str,
    pub url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RedeemRecoveryRequest<'a> {
    pub user_id: &'a str,
    pub secret: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateVerificationRequest<'a> {
    pub url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RedeemVerificationRequest<'a> {
    pub user_id: &'a str,
    pub secret: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_snapshot_round_trips_with_wire_casing() {
        let user = User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            image_url: "https://cdn.example.com/ada.png".to_string(),
            bio: "hello".to_string(),
            verified: true,
            label: "admin".to_string(),
        };

        let json = serde_json::to_string(&user).expect("Failed to serialize");
        assert!(json.contains("\"imageUrl\""));

        let decoded: User = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(decoded, user);
    }

    #[test]
    fn empty_user_is_the_unauthenticated_sentinel() {
        assert!(User::default().is_empty());
    }

    #[test]
    fn from_parts_merges_account_and_profile() {
        let account = Account {
            id: "acc-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            verified: true,
            labels: vec!["admin".to_string(), "beta".to_string()],
        };
        let profile = Profile {
            id: "u-1".to_string(),
            account_id: "acc-1".to_string(),
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            image_url: String::new(),
            bio: String::new(),
        };

        let user = User::from_parts(profile, &account);
        assert_eq!(user.id, "u-1");
        assert!(user.verified);
        assert_eq!(user.label, "admin");
    }
}
