/// A validated partial update to a user profile.
///
/// `None` leaves the stored value untouched; `Some` replaces it. Callers
/// build this only after every supplied field has passed validation, so
/// persisting one is all-or-nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    /// Already normalized (trimmed, lowercased)
    pub email: Option<String>,
    /// Hash of the replacement password, never the raw value
    pub password_hash: Option<String>,
    pub business_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

impl ProfileChanges {
    /// True when no field is set; the write can be skipped entirely
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.business_name.is_none()
            && self.phone.is_none()
            && self.location.is_none()
    }
}
