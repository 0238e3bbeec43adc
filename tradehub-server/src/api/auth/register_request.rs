use serde::Deserialize;

/// Body of POST /auth/register.
///
/// Everything is optional at the serde layer so that a missing field is a
/// 400 from the handler's presence check, not a deserialization rejection
/// with a different shape.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name (required)
    #[serde(default)]
    pub name: Option<String>,

    /// Email address; normalized to lowercase before use (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Raw password, minimum 8 characters (required)
    #[serde(default)]
    pub password: Option<String>,

    /// One of "supplier", "retailer", "admin"; defaults to "retailer"
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub business_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub location: Option<String>,
}
