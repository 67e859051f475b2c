//! Account entity representing a registered user of the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Phone number attached to an account
///
/// All three parts are opaque strings; no format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

impl Phone {
    pub fn new(
        number: impl Into<String>,
        city_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            city_code: city_code.into(),
            country_code: country_code.into(),
        }
    }
}

/// Account entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, unique across all accounts
    pub email: String,

    /// Password digest; never serialized outward
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Last bearer token issued for this account
    pub token: Option<String>,

    /// Whether the account is active
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last profile or password change
    pub modified_at: DateTime<Utc>,

    /// Timestamp of the last login
    pub last_login_at: DateTime<Utc>,

    /// Phones in the order they were supplied
    pub phones: Vec<Phone>,
}

impl Account {
    /// Creates a new active account with all lifecycle timestamps set to `now`
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        token: Option<String>,
        phones: Vec<Phone>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            token,
            is_active: true,
            created_at: now,
            modified_at: now,
            last_login_at: now,
            phones,
        }
    }

    /// Replaces name and email
    pub fn update_profile(&mut self, name: String, email: String, now: DateTime<Utc>) {
        self.name = name;
        self.email = email;
        self.modified_at = now;
    }

    /// Replaces the whole phone list
    pub fn replace_phones(&mut self, phones: Vec<Phone>) {
        self.phones = phones;
    }

    /// Stores a new password digest
    pub fn change_password_hash(&mut self, password_hash: String, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.modified_at = now;
    }

    /// Checks whether `email` is the address currently on file
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}
