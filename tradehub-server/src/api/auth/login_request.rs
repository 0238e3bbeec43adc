use serde::Deserialize;

/// Body of POST /auth/login
#[derive(Debug, Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}
