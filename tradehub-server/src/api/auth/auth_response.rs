use crate::UserDto;
use serde::Serialize;

/// Registration and login response: the credential plus the identity it
/// proves
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}
