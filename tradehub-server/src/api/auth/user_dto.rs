use tradehub_core::User;

use serde::Serialize;

/// User DTO for JSON serialization: the public projection of an identity.
/// There is no password field here and never will be.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub business_name: String,
    pub phone: String,
    pub location: String,
    /// RFC 3339
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name,
            email: u.email,
            role: u.role.to_string(),
            business_name: u.business_name,
            phone: u.phone,
            location: u.location,
            created_at: u.created_at.to_rfc3339(),
            updated_at: u.updated_at.to_rfc3339(),
        }
    }
}
