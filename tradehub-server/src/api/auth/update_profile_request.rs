use serde::Deserialize;

/// Body of PUT /auth/profile.
///
/// A partial update: absent fields are left untouched. Supplied fields are
/// validated together before anything is written, so a bad value anywhere
/// means no change at all.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Replacement password, minimum 8 characters
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub business_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub location: Option<String>,
}
