use bson::{Bson, doc};

use crate::engine::column::UNSUPPORTED_MARKER;
use crate::engine::document::extjson;
use crate::engine::document::{DocumentCursor, DocumentsCursor};
use crate::engine::errors::TranscodeError;
use crate::engine::frame::FieldValues;
use crate::engine::table::{TableTranscoder, transcode_table};
use crate::engine::types::{ElementKind, FieldType, RawKind};
use crate::test_helpers::factory::Factory;

#[test]
fn disjoint_rows_are_padded() {
    let mut cursor = Factory::cursor()
        .with_document(doc! { "a": 1, "b": false })
        .with_document(doc! { "c": "foo", "d": 2.0 })
        .create();

    let frame = transcode_table(&mut cursor, "test").unwrap();

    assert_eq!(frame.name(), "test");
    assert_eq!(frame.field_names(), vec!["a", "b", "c", "d"]);
    assert!(frame.is_rectangular());
    assert_eq!(
        frame.field_by_name("a").unwrap().values(),
        &FieldValues::Int32(vec![Some(1), None])
    );
    assert_eq!(
        frame.field_by_name("b").unwrap().values(),
        &FieldValues::Bool(vec![Some(false), None])
    );
    assert_eq!(
        frame.field_by_name("c").unwrap().values(),
        &FieldValues::String(vec![None, Some("foo".into())])
    );
    assert_eq!(
        frame.field_by_name("d").unwrap().values(),
        &FieldValues::Float64(vec![None, Some(2.0)])
    );
}

#[test]
fn int32_column_rewritten_on_int64() {
    let mut cursor = Factory::cursor()
        .with_document(doc! { "x": 1_i32 })
        .with_document(doc! { "x": 2_147_483_648_i64 })
        .create();

    let frame = TableTranscoder::default().transcode(&mut cursor).unwrap();

    assert_eq!(frame.name(), "Table");
    assert_eq!(
        frame.field_by_name("x").unwrap().values(),
        &FieldValues::Int64(vec![Some(1), Some(2_147_483_648)])
    );
}

#[test]
fn mixed_composites_become_json() {
    let mut cursor = Factory::cursor()
        .with_document(doc! { "v": [1, "bar", { "baz": 1 }] })
        .with_document(doc! { "v": { "k": true } })
        .with_document(doc! { "other": 1 })
        .create();

    let frame = transcode_table(&mut cursor, "t").unwrap();
    let field = frame.field_by_name("v").unwrap();

    assert_eq!(field.field_type(), FieldType::NullableJson);
    assert!(field.is_null(2));
    let text = field.value_at(0).unwrap();
    let parsed = extjson::decode(text.as_str().unwrap()).unwrap();
    assert_eq!(parsed, Bson::Array(vec![1.into(), "bar".into(), doc! { "baz": 1 }.into()]));
}

#[test]
fn composite_then_scalar_is_a_mismatch() {
    let mut cursor = Factory::cursor()
        .with_document(doc! { "v": [1] })
        .with_document(doc! { "v": "s" })
        .create();

    let err = transcode_table(&mut cursor, "t").unwrap_err();
    assert!(matches!(
        err,
        TranscodeError::FieldTypeMismatch {
            expected: ElementKind::Composite,
            actual: RawKind::String,
            ..
        }
    ));
}

#[test]
fn bool_then_string_aborts() {
    let mut cursor = Factory::cursor()
        .with_document(doc! { "flag": true })
        .with_document(doc! { "flag": "yes" })
        .create();

    let err = transcode_table(&mut cursor, "t").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"field "flag" should have boolean type, but got string"#
    );
}

#[test]
fn all_null_field_has_no_column() {
    let mut cursor = Factory::cursor()
        .with_documents(Factory::document().with_null("gone").with("keep", 1).create_list(3))
        .create();

    let frame = transcode_table(&mut cursor, "t").unwrap();
    assert_eq!(frame.field_names(), vec!["keep", "index"]);
    assert_eq!(frame.rows(), 3);
}

#[test]
fn late_field_backfills_earlier_rows() {
    let mut cursor = Factory::cursor()
        .with_document(doc! { "a": null })
        .with_document(doc! { "b": 1 })
        .with_document(doc! { "a": "late" })
        .create();

    let frame = transcode_table(&mut cursor, "t").unwrap();
    assert_eq!(
        frame.field_by_name("a").unwrap().values(),
        &FieldValues::String(vec![None, None, Some("late".into())])
    );
}

#[test]
fn empty_cursor_gives_empty_frame() {
    let mut cursor = DocumentsCursor::new(Vec::new());
    let frame = transcode_table(&mut cursor, "t").unwrap();

    assert!(frame.is_empty());
    assert_eq!(frame.rows(), 0);
}

#[test]
fn transcoder_is_reusable() {
    let transcoder = TableTranscoder::new("again");
    let mut first = Factory::cursor().with_document(doc! { "a": 1 }).create();
    let mut second = Factory::cursor().with_document(doc! { "b": "x" }).create();

    let one = transcoder.transcode(&mut first).unwrap();
    let two = transcoder.transcode(&mut second).unwrap();

    assert_eq!(one.field_names(), vec!["a"]);
    assert_eq!(two.field_names(), vec!["b"]);
}

#[test]
fn works_through_trait_object_and_lines() {
    let mut lines = Factory::cursor()
        .with_document(doc! { "when": bson::DateTime::from_millis(5) })
        .create_lines();
    let cursor: &mut dyn DocumentCursor = &mut lines;

    let frame = transcode_table(cursor, "t").unwrap();
    assert_eq!(
        frame.field_by_name("when").unwrap().values(),
        &FieldValues::Time(vec![Some(5)])
    );
}

#[test]
fn unsupported_value_in_string_column_keeps_the_table() {
    let mut cursor = Factory::cursor()
        .with_document(doc! { "amount": "12.5" })
        .with_document(doc! { "amount": bson::Decimal128::from_bytes([0; 16]) })
        .create();

    let frame = transcode_table(&mut cursor, "t").unwrap();
    assert_eq!(
        frame.field_by_name("amount").unwrap().values(),
        &FieldValues::String(vec![Some("12.5".into()), Some(UNSUPPORTED_MARKER.into())])
    );
}
