use super::*;
use serde_json::json;

/// Tests both wire encodings of a snowflake.
///
/// Expected: Ok with equal values for string and integer
#[test]
fn accepts_string_and_integer_snowflakes() {
    let from_str: Snowflake = serde_json::from_value(json!("81384788765712384")).unwrap();
    let from_int: Snowflake = serde_json::from_value(json!(81384788765712384u64)).unwrap();

    assert_eq!(from_str, from_int);
    assert_eq!(from_str.get(), 81384788765712384);
}

/// Tests zero, non-numeric and negative snowflakes.
///
/// Expected: Err for each
#[test]
fn rejects_zero_and_garbage_snowflakes() {
    assert!(serde_json::from_value::<Snowflake>(json!("0")).is_err());
    assert!(serde_json::from_value::<Snowflake>(json!("general")).is_err());
    assert!(serde_json::from_value::<Snowflake>(json!(-5)).is_err());
}

/// Tests both wire encodings of a permission mask.
///
/// Expected: Ok with VIEW_CHANNEL for 1024
#[test]
fn permission_mask_reads_both_encodings() {
    let from_str: PermissionMask = serde_json::from_value(json!("1024")).unwrap();
    let from_int: PermissionMask = serde_json::from_value(json!(1024)).unwrap();

    assert_eq!(from_str, PermissionMask(1024));
    assert_eq!(Permissions::from(from_int), Permissions::VIEW_CHANNEL);
}

/// Tests a mask carrying a bit serenity has no flag for.
///
/// Expected: Ok with every bit kept after conversion
#[test]
fn permission_mask_keeps_unnamed_bits() {
    let raw = 1024 | (1u64 << 60);
    let mask: PermissionMask = serde_json::from_value(json!(raw.to_string())).unwrap();

    assert_eq!(Permissions::from(mask).bits(), raw);
}
