use super::*;

const TEN: &str = "0123456789";

// =============================================================
// validate_post_form
// =============================================================

#[test]
fn title_of_two_chars_rejected() {
    let err = validate_post_form("ab", TEN, false).unwrap_err();
    assert_eq!(err.get("title"), Some("Title must be at least 3 characters"));
    assert_eq!(err.get("content"), None);
}

#[test]
fn title_of_three_chars_accepted() {
    let payload = validate_post_form("abc", TEN, true).unwrap();
    assert_eq!(payload.title, "abc");
    assert!(payload.is_published);
}

#[test]
fn content_of_nine_chars_rejected() {
    let err = validate_post_form("abc", "012345678", false).unwrap_err();
    assert_eq!(err.get("content"), Some("Content must be at least 10 characters"));
    assert_eq!(err.get("title"), None);
}

#[test]
fn content_of_ten_chars_accepted() {
    assert!(validate_post_form("abc", TEN, false).is_ok());
}

#[test]
fn title_upper_bound() {
    assert!(validate_post_form(&"t".repeat(100), TEN, false).is_ok());
    let err = validate_post_form(&"t".repeat(101), TEN, false).unwrap_err();
    assert_eq!(err.get("title"), Some("Title must be less than 100 characters"));
}

#[test]
fn content_upper_bound() {
    assert!(validate_post_form("abc", &"c".repeat(5000), false).is_ok());
    let err = validate_post_form("abc", &"c".repeat(5001), false).unwrap_err();
    assert_eq!(err.get("content"), Some("Content must be less than 5000 characters"));
}

#[test]
fn both_fields_reported_together() {
    let err = validate_post_form("", "", false).unwrap_err();
    assert!(err.get("title").is_some());
    assert!(err.get("content").is_some());
}

#[test]
fn lengths_count_characters_not_bytes() {
    // Three characters, nine bytes.
    assert!(validate_post_form("日本語", TEN, false).is_ok());
}

#[test]
fn input_is_not_trimmed() {
    let payload = validate_post_form("  a", TEN, false).unwrap();
    assert_eq!(payload.title, "  a");
}

// =============================================================
// validate_login_form
// =============================================================

#[test]
fn login_trims_email() {
    let req = validate_login_form("  a@b.com ", "pw").unwrap();
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password, "pw");
}

#[test]
fn login_requires_both_fields() {
    let err = validate_login_form("", "").unwrap_err();
    assert_eq!(err.get("email"), Some("Email is required"));
    assert_eq!(err.get("password"), Some("Password is required"));
}

#[test]
fn login_rejects_email_without_at() {
    let err = validate_login_form("alice", "pw").unwrap_err();
    assert_eq!(err.get("email"), Some("Enter a valid email address"));
}

// =============================================================
// validate_register_form
// =============================================================

#[test]
fn register_accepts_valid_input() {
    let req = validate_register_form(" Alice ", "alice@example.com", "secret").unwrap();
    assert_eq!(req.name, "Alice");
}

#[test]
fn register_rejects_short_password() {
    let err = validate_register_form("Alice", "alice@example.com", "12345").unwrap_err();
    assert_eq!(err.get("password"), Some("Password must be at least 6 characters"));
}

#[test]
fn register_requires_name() {
    let err = validate_register_form("   ", "alice@example.com", "secret").unwrap_err();
    assert_eq!(err.get("name"), Some("Name is required"));
}
