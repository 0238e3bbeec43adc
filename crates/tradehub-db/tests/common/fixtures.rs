#![allow(dead_code)]

use tradehub_core::{Role, UserRecord};

/// Creates a test UserRecord with a pre-normalized email.
/// The hash is a fixed bcrypt-shaped string; these tests never verify it.
pub fn create_test_record(email: &str) -> UserRecord {
    UserRecord::new(
        "Test Trader".to_string(),
        email.to_string(),
        "$2b$04$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy".to_string(),
        Role::Retailer,
        "Test Trading Co".to_string(),
        "+977-1-5550123".to_string(),
        "Kathmandu".to_string(),
    )
}

/// Creates a test UserRecord with an explicit role
pub fn create_test_record_with_role(email: &str, role: Role) -> UserRecord {
    let mut record = create_test_record(email);
    record.user.role = role;
    record
}
