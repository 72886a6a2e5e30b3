use crate::engine::document::{DocumentCursor, RawValue};
use crate::test_helpers::factory::Factory;

#[test]
fn test_cursor_factory_in_memory() {
    let mut cursor = Factory::cursor()
        .with_document(Factory::document().with("a", 1).create())
        .with_document(Factory::document().with("b", true).create())
        .create();

    assert!(cursor.advance().unwrap());
    assert_eq!(cursor.current().lookup("a"), Some(&RawValue::Int32(1)));
    assert!(cursor.advance().unwrap());
    assert_eq!(cursor.current().lookup("b"), Some(&RawValue::Boolean(true)));
    assert!(!cursor.advance().unwrap());
}

#[test]
fn test_cursor_factory_lines_preserve_types() {
    let mut cursor = Factory::cursor()
        .with_document(Factory::document().with("n", 5_i64).create())
        .create_lines();

    assert!(cursor.advance().unwrap());
    assert_eq!(cursor.current().lookup("n"), Some(&RawValue::Int64(5)));
    assert!(!cursor.advance().unwrap());
}
