pub mod profile_changes;
pub mod role;
pub mod user;
