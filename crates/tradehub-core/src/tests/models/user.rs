use crate::{Role, UserRecord};

fn create_test_record() -> UserRecord {
    UserRecord::new(
        "Ana Traders".to_string(),
        "ana@tradehub.example".to_string(),
        "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        Role::Supplier,
        "Ana Trading Co".to_string(),
        "+977-1-5550123".to_string(),
        "Kathmandu".to_string(),
    )
}

#[test]
fn given_new_record_when_created_then_timestamps_match() {
    let record = create_test_record();

    assert_eq!(record.user.created_at, record.user.updated_at);
}

#[test]
fn given_two_records_when_created_then_ids_differ() {
    let a = create_test_record();
    let b = create_test_record();

    assert_ne!(a.user.id, b.user.id);
}

#[test]
fn given_user_when_serialized_then_no_password_material() {
    let record = create_test_record();

    let json = serde_json::to_string(&record.user).unwrap();

    assert!(!json.contains("password"));
    assert!(!json.contains("$2b$"));
}
