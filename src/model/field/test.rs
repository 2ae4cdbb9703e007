use super::*;

/// Tests replacing a field with an equal value.
///
/// Expected: None with the value untouched
#[test]
fn equal_values_produce_no_change() {
    let field = Field::new(String::from("general"));

    assert!(field.replace_if_changed("general".to_string()).is_none());
    assert_eq!(field.get(), "general");
}

/// Tests replacing a field with a different value.
///
/// Expected: Some(Change) with the new value stored
#[test]
fn differing_value_is_stored_and_reported() {
    let field = Field::new(3);

    let change = field.replace_if_changed(7).unwrap();

    assert_eq!(change, Change { old: 3, new: 7 });
    assert_eq!(field.get(), 7);
}

/// Tests comparing through a projection.
///
/// Verifies that values projecting to the same key are not a change, while the
/// stored representation is still replaced.
///
/// Expected: None for an equal projection, Some(Change) of keys otherwise
#[test]
fn projection_decides_identity() {
    // 500 is not "known", so it projects to the same key as None.
    let field = Field::new(Some(500u64));
    let known = |raw: &Option<u64>| raw.filter(|id| *id < 100);

    assert!(field.replace_if_changed_by(None, known).is_none());
    assert_eq!(field.get(), None);

    let change = field.replace_if_changed_by(Some(10), known).unwrap();
    assert_eq!(change.old, None);
    assert_eq!(change.new, Some(10));
    assert_eq!(field.get(), Some(10));
}
