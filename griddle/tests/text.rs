use griddle::utils::text::{humanize, truncate_text};

#[test]
fn test_humanize_camel_case() {
    assert_eq!(humanize("createdAt"), "Created At");
}

#[test]
fn test_humanize_snake_case() {
    assert_eq!(humanize("created_at"), "Created At");
}

#[test]
fn test_humanize_kebab_case() {
    assert_eq!(humanize("created-at"), "Created At");
}

#[test]
fn test_humanize_single_word() {
    assert_eq!(humanize("email"), "Email");
}

#[test]
fn test_humanize_idempotent_on_capitalized() {
    assert_eq!(humanize("Name"), "Name");
}

#[test]
fn test_humanize_uses_last_path_segment() {
    assert_eq!(humanize("user.profile.displayName"), "Display Name");
}

#[test]
fn test_humanize_drops_bracket_index() {
    assert_eq!(humanize("items[0]"), "Items");
}

#[test]
fn test_humanize_empty_input() {
    assert_eq!(humanize(""), "");
}

#[test]
fn test_humanize_trailing_dot() {
    // Malformed accessor degrades to an empty label, no panic
    assert_eq!(humanize("user."), "");
}

#[test]
fn test_humanize_numeric_suffix() {
    assert_eq!(humanize("address2"), "Address2");
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_text("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_fit() {
    assert_eq!(truncate_text("hello", 5), "hello");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_text("hello world", 6), "hello…");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate_text("hello", 0), "");
}
