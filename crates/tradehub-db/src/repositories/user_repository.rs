//! User repository - all credential store access goes through here.
//!
//! Two projections come out of this module. [`UserRecord`] carries the
//! password hash and only the login path asks for it; [`User`] is the
//! hash-free shape everything else sees. No query selects the hash unless
//! its return type says so.
//!
//! Runtime `sqlx::query` is used instead of the `query!` macros so the
//! crate builds without a database or offline query data.

use crate::{DbError, Result as DbErrorResult};

use tradehub_core::{ProfileChanges, Role, User, UserRecord};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity record. A duplicate email surfaces as
    /// [`DbError::EmailTaken`] via the unique constraint.
    pub async fn create(&self, record: &UserRecord) -> DbErrorResult<()> {
        let user = &record.user;
        let id = user.id.to_string();
        let role = user.role.as_str();
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, email, password_hash, role,
                    business_name, phone, location, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&record.password_hash)
        .bind(role)
        .bind(&user.business_name)
        .bind(&user.phone)
        .bind(&user.location)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Full record by normalized email, hash included. Login verifies
    /// against this; nothing else should call it.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, password_hash, role,
                    business_name, phone, location, created_at, updated_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_record_row(&r)).transpose()
    }

    /// Hash-free projection by id - what the identity resolver attaches
    /// to a request
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, email, role,
                    business_name, phone, location, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(&id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user_row(&r)).transpose()
    }

    /// True when `email` already belongs to an identity other than `id`.
    /// The profile update path probes with this before changing an email.
    pub async fn email_in_use_by_other(&self, email: &str, id: Uuid) -> DbErrorResult<bool> {
        let id = id.to_string();

        let row = sqlx::query("SELECT 1 FROM users WHERE email = ? AND id != ?")
            .bind(email)
            .bind(&id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Apply a validated partial update and return the updated projection,
    /// or `None` when the identity no longer exists.
    ///
    /// One COALESCE statement keeps the write all-or-nothing: unset fields
    /// keep their stored value, and a unique-email collision rolls the
    /// whole thing back as [`DbError::EmailTaken`].
    pub async fn update(&self, id: Uuid, changes: &ProfileChanges) -> DbErrorResult<Option<User>> {
        let id = id.to_string();
        let updated_at = Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                UPDATE users SET
                    name          = COALESCE(?, name),
                    email         = COALESCE(?, email),
                    password_hash = COALESCE(?, password_hash),
                    business_name = COALESCE(?, business_name),
                    phone         = COALESCE(?, phone),
                    location      = COALESCE(?, location),
                    updated_at    = ?
                WHERE id = ?
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.password_hash.as_deref())
        .bind(changes.business_name.as_deref())
        .bind(changes.phone.as_deref())
        .bind(changes.location.as_deref())
        .bind(updated_at)
        .bind(&id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let row = sqlx::query(
            r#"
                SELECT id, name, email, role,
                    business_name, phone, location, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(&id)
        .fetch_one(&mut *tx)
        .await?;

        let user = map_user_row(&row)?;
        tx.commit().await?;

        Ok(Some(user))
    }
}

/// Map the hash-free identity columns
fn map_user_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role: Role::from_str(&role).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        business_name: row.try_get("business_name")?,
        phone: row.try_get("phone")?,
        location: row.try_get("location")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::CorruptRow {
            message: "Invalid timestamp in users.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| DbError::CorruptRow {
            message: "Invalid timestamp in users.updated_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}

/// Map the full column set, hash included
fn map_record_row(row: &SqliteRow) -> DbErrorResult<UserRecord> {
    let user = map_user_row(row)?;
    let password_hash: String = row.try_get("password_hash")?;

    Ok(UserRecord {
        user,
        password_hash,
    })
}
