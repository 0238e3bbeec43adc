//! User identity - the account entity behind every authenticated request.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user identity as it circulates through the system: request context,
/// store projections, API responses. Deliberately has no password field,
/// so a credential can never leak through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Stored normalized: trimmed and lowercased
    pub email: String,
    pub role: Role,
    pub business_name: String,
    pub phone: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The full persisted record: identity plus credential. Only the store and
/// the login path handle this; it is never serialized into a response.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

impl UserRecord {
    /// Create a new record with a fresh id and current timestamps
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        role: Role,
        business_name: String,
        phone: String,
        location: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            user: User {
                id: Uuid::new_v4(),
                name,
                email,
                role,
                business_name,
                phone,
                location,
                created_at: now,
                updated_at: now,
            },
            password_hash,
        }
    }
}
