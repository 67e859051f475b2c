//! MySQL implementation of the AccountRepository trait.
//!
//! Accounts live in `accounts`, phones in `phones` keyed by account id and
//! position. Writes touching both tables run in one transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::{MySqlDatabaseError, MySqlRow};
use sqlx::{MySql, MySqlPool, Row, Transaction};
use uuid::Uuid;

use ua_core::domain::entities::{Account, Phone};
use ua_core::errors::{ConflictError, DomainError};
use ua_core::repositories::AccountRepository;

/// MySQL error number for a duplicate key
const ER_DUP_ENTRY: u16 = 1062;

const ACCOUNT_COLUMNS: &str = r#"
    id, name, email, password_hash, token, is_active,
    created_at, modified_at, last_login_at
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert an `accounts` row to an Account without phones
    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| read_error("id", e))?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::storage(format!("Invalid account UUID: {}", e)))?,
            name: row.try_get("name").map_err(|e| read_error("name", e))?,
            email: row.try_get("email").map_err(|e| read_error("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| read_error("password_hash", e))?,
            token: row.try_get("token").map_err(|e| read_error("token", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| read_error("is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| read_error("created_at", e))?,
            modified_at: row
                .try_get::<DateTime<Utc>, _>("modified_at")
                .map_err(|e| read_error("modified_at", e))?,
            last_login_at: row
                .try_get::<DateTime<Utc>, _>("last_login_at")
                .map_err(|e| read_error("last_login_at", e))?,
            phones: Vec::new(),
        })
    }

    fn row_to_phone(row: &MySqlRow) -> Result<Phone, DomainError> {
        Ok(Phone {
            number: row.try_get("number").map_err(|e| read_error("number", e))?,
            city_code: row
                .try_get("city_code")
                .map_err(|e| read_error("city_code", e))?,
            country_code: row
                .try_get("country_code")
                .map_err(|e| read_error("country_code", e))?,
        })
    }

    async fn phones_of(&self, account_id: Uuid) -> Result<Vec<Phone>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT number, city_code, country_code
            FROM phones
            WHERE account_id = ?
            ORDER BY position
            "#,
        )
        .bind(account_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        rows.iter().map(Self::row_to_phone).collect()
    }

    async fn with_phones(&self, row: Option<MySqlRow>) -> Result<Option<Account>, DomainError> {
        match row {
            Some(row) => {
                let mut account = Self::row_to_account(&row)?;
                account.phones = self.phones_of(account.id).await?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    async fn write_account(
        tx: &mut Transaction<'_, MySql>,
        account: &Account,
    ) -> Result<(), DomainError> {
        let id = account.id.to_string();

        let existing = sqlx::query("SELECT id FROM accounts WHERE id = ? FOR UPDATE")
            .bind(&id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(query_error)?;

        let statement = if existing.is_some() {
            r#"
            UPDATE accounts
            SET name = ?, email = ?, password_hash = ?, token = ?, is_active = ?,
                created_at = ?, modified_at = ?, last_login_at = ?
            WHERE id = ?
            "#
        } else {
            r#"
            INSERT INTO accounts (
                name, email, password_hash, token, is_active,
                created_at, modified_at, last_login_at, id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        };

        sqlx::query(statement)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.token)
            .bind(account.is_active)
            .bind(account.created_at)
            .bind(account.modified_at)
            .bind(account.last_login_at)
            .bind(&id)
            .execute(&mut **tx)
            .await
            .map_err(write_error)?;

        Ok(())
    }

    async fn write_phones(
        tx: &mut Transaction<'_, MySql>,
        account: &Account,
    ) -> Result<(), DomainError> {
        let id = account.id.to_string();

        sqlx::query("DELETE FROM phones WHERE account_id = ?")
            .bind(&id)
            .execute(&mut **tx)
            .await
            .map_err(write_error)?;

        for (position, phone) in account.phones.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO phones (account_id, position, number, city_code, country_code)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(position as i32)
            .bind(&phone.number)
            .bind(&phone.city_code)
            .bind(&phone.country_code)
            .execute(&mut **tx)
            .await
            .map_err(write_error)?;
        }

        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE id = ? LIMIT 1", ACCOUNT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        self.with_phones(row).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE email = ? LIMIT 1", ACCOUNT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        self.with_phones(row).await
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts", ACCOUNT_COLUMNS);

        let account_rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        let phone_rows = sqlx::query(
            r#"
            SELECT account_id, number, city_code, country_code
            FROM phones
            ORDER BY account_id, position
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        let mut phones: HashMap<String, Vec<Phone>> = HashMap::new();
        for row in &phone_rows {
            let account_id: String = row
                .try_get("account_id")
                .map_err(|e| read_error("account_id", e))?;
            phones
                .entry(account_id)
                .or_default()
                .push(Self::row_to_phone(row)?);
        }

        account_rows
            .iter()
            .map(|row| {
                let mut account = Self::row_to_account(row)?;
                account.phones = phones.remove(&account.id.to_string()).unwrap_or_default();
                Ok(account)
            })
            .collect()
    }

    async fn save(&self, account: Account) -> Result<Account, DomainError> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        Self::write_account(&mut tx, &account).await?;
        Self::write_phones(&mut tx, &account).await?;

        tx.commit().await.map_err(write_error)?;

        tracing::debug!(
            account_id = %account.id,
            phones = account.phones.len(),
            "Account saved"
        );
        Ok(account)
    }

    async fn delete(&self, account: &Account) -> Result<(), DomainError> {
        let id = account.id.to_string();
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        sqlx::query("DELETE FROM phones WHERE account_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

        sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

        tx.commit().await.map_err(write_error)?;

        tracing::debug!(account_id = %account.id, "Account deleted");
        Ok(())
    }
}

fn read_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::storage(format!("Failed to get {}: {}", column, e))
}

fn query_error(e: sqlx::Error) -> DomainError {
    DomainError::storage(format!("Database query failed: {}", e))
}

/// A duplicate key on write can only come from the email index
fn write_error(e: sqlx::Error) -> DomainError {
    if is_duplicate_entry(&e) {
        return ConflictError::EmailAlreadyExists.into();
    }
    DomainError::storage(format!("Database write failed: {}", e))
}

fn is_duplicate_entry(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db
            .try_downcast_ref::<MySqlDatabaseError>()
            .map(|mysql| mysql.number() == ER_DUP_ENTRY)
            .unwrap_or(false),
        _ => false,
    }
}
