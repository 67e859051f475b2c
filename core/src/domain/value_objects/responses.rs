//! Projections of an account returned to callers.
//!
//! None of them carries the password digest. Field names follow the public
//! JSON contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Account, Phone};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneView {
    pub number: String,
    #[serde(rename = "citycode")]
    pub city_code: String,
    #[serde(rename = "countrycode")]
    pub country_code: String,
}

impl From<&Phone> for PhoneView {
    fn from(phone: &Phone) -> Self {
        Self {
            number: phone.number.clone(),
            city_code: phone.city_code.clone(),
            country_code: phone.country_code.clone(),
        }
    }
}

fn phone_views(account: &Account) -> Vec<PhoneView> {
    account.phones.iter().map(PhoneView::from).collect()
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreated {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub token: Option<String>,
    #[serde(rename = "isactive")]
    pub is_active: bool,
}

impl From<&Account> for AccountCreated {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            created: account.created_at,
            modified: account.modified_at,
            last_login: account.last_login_at,
            token: account.token.clone(),
            is_active: account.is_active,
        }
    }
}

/// Single account lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetail {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phones: Vec<PhoneView>,
    pub is_active: bool,
}

impl From<&Account> for AccountDetail {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            phones: phone_views(account),
            is_active: account.is_active,
        }
    }
}

/// Account list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phones: Vec<PhoneView>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub is_active: bool,
    pub last_login: DateTime<Utc>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            phones: phone_views(account),
            created: account.created_at,
            modified: account.modified_at,
            is_active: account.is_active,
            last_login: account.last_login_at,
        }
    }
}

/// Result of a profile update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdated {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phones: Vec<PhoneView>,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl From<&Account> for AccountUpdated {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            phones: phone_views(account),
            is_active: account.is_active,
            created: account.created_at,
            modified: account.modified_at,
        }
    }
}

/// Plain acknowledgement for operations without a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationMessage {
    pub message: String,
}

impl OperationMessage {
    pub const PASSWORD_CHANGED: &'static str = "Password updated successfully";
    pub const ACCOUNT_DELETED: &'static str = "Account deleted successfully";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(
            "Juan".to_string(),
            "juan@x.cl".to_string(),
            "digest".to_string(),
            Some("jwt".to_string()),
            vec![Phone::new("1234567", "1", "57")],
            Utc::now(),
        )
    }

    #[test]
    fn test_created_uses_isactive_key() {
        let json = serde_json::to_value(AccountCreated::from(&account())).unwrap();
        assert_eq!(json["isactive"], true);
        assert_eq!(json["token"], "jwt");
        assert!(json.get("last_login").is_some());
        assert!(json.get("is_active").is_none());
    }

    #[test]
    fn test_phone_wire_names() {
        let json = serde_json::to_value(AccountDetail::from(&account())).unwrap();
        let phone = &json["phones"][0];
        assert_eq!(phone["citycode"], "1");
        assert_eq!(phone["countrycode"], "57");
        assert_eq!(json["is_active"], true);
    }

    #[test]
    fn test_projections_never_expose_digest() {
        let account = account();
        for json in [
            serde_json::to_string(&AccountCreated::from(&account)).unwrap(),
            serde_json::to_string(&AccountDetail::from(&account)).unwrap(),
            serde_json::to_string(&AccountSummary::from(&account)).unwrap(),
            serde_json::to_string(&AccountUpdated::from(&account)).unwrap(),
        ] {
            assert!(!json.contains("digest"));
        }
    }
}
