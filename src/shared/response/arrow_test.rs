use std::io::Cursor;

use arrow_array::Array;
use arrow_array::cast::AsArray;
use arrow_array::types::Int64Type;
use arrow_ipc::reader::StreamReader;

use crate::engine::frame::{Field, FieldValues, Frame};
use crate::shared::response::{ArrowRenderer, ArrowStreamEncoder, FrameRenderer};

fn frame(name: &str, values: Vec<Option<i64>>) -> Frame {
    Frame::with_fields(name, vec![Field::new("v", FieldValues::Int64(values))])
}

#[test]
fn stream_round_trips_through_reader() {
    let out = ArrowRenderer
        .render(&[frame("series", vec![Some(1), None, Some(3)])])
        .unwrap();

    let mut reader = StreamReader::try_new(Cursor::new(out), None).unwrap();
    assert_eq!(
        reader.schema().metadata().get("name").map(String::as_str),
        Some("series")
    );

    let batch = reader.next().unwrap().unwrap();
    assert_eq!(batch.num_rows(), 3);
    let column = batch.column(0).as_primitive::<Int64Type>();
    assert_eq!(column.value(0), 1);
    assert!(column.is_null(1));
    assert!(reader.next().is_none());
}

#[test]
fn streams_are_concatenated_per_frame() {
    let mut expected = Vec::new();
    ArrowStreamEncoder::new()
        .write_frame(&frame("a", vec![Some(1)]), &mut expected)
        .unwrap();
    let first_len = expected.len();
    ArrowStreamEncoder::new()
        .write_frame(&frame("b", vec![Some(2)]), &mut expected)
        .unwrap();

    let out = ArrowRenderer
        .render(&[frame("a", vec![Some(1)]), frame("b", vec![Some(2)])])
        .unwrap();
    assert_eq!(out, expected);

    let mut second = StreamReader::try_new(Cursor::new(out[first_len..].to_vec()), None).unwrap();
    assert_eq!(
        second.schema().metadata().get("name").map(String::as_str),
        Some("b")
    );
    assert_eq!(second.next().unwrap().unwrap().num_rows(), 1);
}
