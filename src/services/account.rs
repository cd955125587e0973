//! Account service — registration, credential checks, profile updates.
//!
//! DESIGN
//! ======
//! Input validation is pure and runs before any query, so malformed requests
//! never touch the database. Uniqueness is checked up front for friendly
//! messages and enforced again by the `UNIQUE` constraints for races.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::password::{self, HashError};

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 80;
pub const PASSWORD_MIN_CHARS: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Current password and new password are required")]
    MissingPasswords,
    #[error("Username must be between 3 and 80 characters")]
    InvalidUsername,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least 6 characters long")]
    WeakPassword,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Current password is incorrect")]
    IncorrectPassword,
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Raw registration body. Fields are optional so missing ones produce a
/// field-specific message instead of a generic decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration input after normalization and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChangePasswordInput {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Partial profile update. `profile_data: Some(Value::Null)` clears the column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub profile_data: Option<Value>,
    pub updated_fields: Vec<String>,
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub profile_data: Option<Value>,
    pub created_at: String,
}

/// Row of the admin user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Accepts `local@domain.tld` where the TLD is at least two ASCII letters.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let domain_chars_ok = domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    local_ok
        && domain_chars_ok
        && !host.is_empty()
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&username.chars().count())
}

/// # Errors
///
/// Returns `WeakPassword` when the password is shorter than the minimum.
pub fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(AccountError::WeakPassword);
    }
    Ok(())
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AccountError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AccountError::MissingField(field))
}

/// Check a registration body in field order and normalize it.
///
/// # Errors
///
/// Returns the first validation failure encountered.
pub fn validate_registration(input: RegisterInput) -> Result<NewAccount, AccountError> {
    let username = required(input.username, "Username")?;
    let email = required(input.email, "Email")?;
    let password = required(input.password, "Password")?;

    let username = username.trim().to_owned();
    let email = normalize_email(&email);

    if !is_valid_username(&username) {
        return Err(AccountError::InvalidUsername);
    }
    if !is_valid_email(&email) {
        return Err(AccountError::InvalidEmail);
    }
    validate_password(&password)?;

    Ok(NewAccount { username, email, password })
}

/// # Errors
///
/// Returns `MissingCredentials` if either field is absent.
pub fn validate_login(input: LoginInput) -> Result<(String, String), AccountError> {
    match (input.email, input.password) {
        (Some(email), Some(password)) => Ok((normalize_email(&email), password)),
        _ => Err(AccountError::MissingCredentials),
    }
}

/// # Errors
///
/// Returns `MissingPasswords` if either field is absent.
pub fn validate_change_password(input: ChangePasswordInput) -> Result<(String, String), AccountError> {
    match (input.current_password, input.new_password) {
        (Some(current), Some(new)) => Ok((current, new)),
        _ => Err(AccountError::MissingPasswords),
    }
}

impl ProfileUpdate {
    /// Build an update from a JSON object body. Unknown keys are ignored for
    /// the update but still reported in `updated_fields` for the audit row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUsername` if `username` is present but not a string of
    /// valid length.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, AccountError> {
        let username = match body.get("username") {
            None => None,
            Some(Value::String(raw)) => {
                let trimmed = raw.trim().to_owned();
                if !is_valid_username(&trimmed) {
                    return Err(AccountError::InvalidUsername);
                }
                Some(trimmed)
            }
            Some(_) => return Err(AccountError::InvalidUsername),
        };
        let profile_data = body.get("profile_data").cloned();
        let updated_fields = body.keys().cloned().collect();
        Ok(Self { username, profile_data, updated_fields })
    }
}

fn map_unique_violation(err: sqlx::Error) -> AccountError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some("users_email_key") => return AccountError::EmailTaken,
                Some("users_username_key") => return AccountError::UsernameTaken,
                _ => {}
            }
        }
    }
    AccountError::Db(err)
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Create a new account. Returns the new user's id.
///
/// # Errors
///
/// Returns `EmailTaken`/`UsernameTaken` on duplicates, or a hashing/database
/// error.
pub async fn register(pool: &PgPool, account: &NewAccount) -> Result<Uuid, AccountError> {
    let email_taken: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
        .bind(&account.email)
        .fetch_one(pool)
        .await?;
    if email_taken {
        return Err(AccountError::EmailTaken);
    }

    let username_taken: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
        .bind(&account.username)
        .fetch_one(pool)
        .await?;
    if username_taken {
        return Err(AccountError::UsernameTaken);
    }

    let password_hash = password::hash_password(&account.password)?;
    let row = sqlx::query(
        r"INSERT INTO users (username, email, password_hash)
          VALUES ($1, $2, $3)
          RETURNING id",
    )
    .bind(&account.username)
    .bind(&account.email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(map_unique_violation)?;

    Ok(row.get("id"))
}

/// Check credentials. Unknown email and wrong password are indistinguishable.
///
/// # Errors
///
/// Returns `InvalidCredentials` on mismatch, or a database error.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<AccountUser, AccountError> {
    let row = sqlx::query("SELECT id, username, email, password_hash FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?
        .ok_or(AccountError::InvalidCredentials)?;

    let stored: String = row.get("password_hash");
    if !password::verify_password(password, &stored) {
        return Err(AccountError::InvalidCredentials);
    }

    Ok(AccountUser { id: row.get("id"), username: row.get("username"), email: row.get("email") })
}

/// # Errors
///
/// Returns `UserNotFound` if the account no longer exists.
pub async fn fetch_profile(pool: &PgPool, user_id: Uuid) -> Result<Profile, AccountError> {
    let row = sqlx::query(
        r#"SELECT id, username, email, profile_data,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
           FROM users WHERE id = $1"#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AccountError::UserNotFound)?;

    Ok(Profile {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        profile_data: row.get("profile_data"),
        created_at: row.get("created_at"),
    })
}

/// Apply a partial profile update.
///
/// # Errors
///
/// Returns `UserNotFound`, `UsernameTaken`, or a database error.
pub async fn update_profile(pool: &PgPool, user_id: Uuid, update: &ProfileUpdate) -> Result<(), AccountError> {
    if let Some(username) = &update.username {
        let owner: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        if owner.is_some_and(|id| id != user_id) {
            return Err(AccountError::UsernameTaken);
        }
    }

    let set_profile_data = update.profile_data.is_some();
    let profile_data = update.profile_data.clone().filter(|v| !v.is_null());

    let result = sqlx::query(
        r"UPDATE users
          SET username = COALESCE($2, username),
              profile_data = CASE WHEN $3 THEN $4 ELSE profile_data END
          WHERE id = $1",
    )
    .bind(user_id)
    .bind(&update.username)
    .bind(set_profile_data)
    .bind(profile_data)
    .execute(pool)
    .await
    .map_err(map_unique_violation)?;

    if result.rows_affected() == 0 {
        return Err(AccountError::UserNotFound);
    }
    Ok(())
}

/// Replace the password after verifying the current one.
///
/// # Errors
///
/// Returns `UserNotFound`, `IncorrectPassword`, `WeakPassword`, or a
/// hashing/database error.
pub async fn change_password(pool: &PgPool, user_id: Uuid, current: &str, new: &str) -> Result<(), AccountError> {
    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AccountError::UserNotFound)?;

    if !password::verify_password(current, &stored) {
        return Err(AccountError::IncorrectPassword);
    }
    validate_password(new)?;

    let new_hash = password::hash_password(new)?;
    sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
        .bind(user_id)
        .bind(new_hash)
        .execute(pool)
        .await?;
    Ok(())
}

/// Every account, oldest first.
///
/// # Errors
///
/// Returns a database error.
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserSummary>, AccountError> {
    let rows = sqlx::query(
        r#"SELECT id, username, email,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
           FROM users
           ORDER BY users.created_at, id"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| UserSummary {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            created_at: row.get("created_at"),
        })
        .collect())
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
