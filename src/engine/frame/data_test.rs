use crate::engine::frame::{Field, FieldValues, Frame};

fn sample() -> Frame {
    Frame::with_fields(
        "Table",
        vec![
            Field::new("a", FieldValues::Int32(vec![Some(1), None])),
            Field::new("b", FieldValues::Bool(vec![Some(false), None])),
        ],
    )
}

#[test]
fn rows_follow_first_field() {
    assert_eq!(sample().rows(), 2);
    assert_eq!(Frame::new("empty").rows(), 0);
}

#[test]
fn lookup_by_name_and_position() {
    let frame = sample();

    assert_eq!(frame.field_by_name("a").map(Field::len), Some(2));
    assert!(frame.field_by_name("missing").is_none());
    assert_eq!(frame.field(0).map(Field::name), Some("a"));
    assert_eq!(frame.field_names(), vec!["a", "b"]);
}

#[test]
fn rectangular_check_detects_ragged_fields() {
    let mut frame = sample();
    assert!(frame.is_rectangular());

    frame.push_field(Field::new("c", FieldValues::String(vec![None])));
    assert!(!frame.is_rectangular());
}
