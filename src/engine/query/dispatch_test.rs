use bson::doc;

use crate::engine::errors::TranscodeError;
use crate::engine::query::{QueryOptions, execute};
use crate::engine::series::SeriesPolicy;
use crate::logging;
use crate::test_helpers::factory::Factory;

#[test]
fn table_mode_returns_one_named_frame() {
    logging::init_for_tests();
    let mut cursor = Factory::cursor()
        .with_documents(Factory::document().with("v", 1.5).create_list(4))
        .create();

    let frames = execute(&mut cursor, &QueryOptions::table("A")).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].name(), "A");
    assert_eq!(frames[0].rows(), 4);
}

#[test]
fn series_mode_returns_frame_per_series() {
    logging::init_for_tests();
    let mut cursor = Factory::cursor()
        .with_document(Factory::series_row().with_name("x").create())
        .with_document(Factory::series_row().with_name("y").create())
        .with_document(Factory::series_row().with_name("x").create())
        .create();

    let frames = execute(&mut cursor, &QueryOptions::time_series(SeriesPolicy::Strict)).unwrap();

    let names: Vec<&str> = frames.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(frames[0].rows(), 2);
}

#[test]
fn failures_are_returned_unchanged() {
    logging::init_for_tests();
    let mut cursor = Factory::cursor()
        .with_document(doc! { "a": 1 })
        .with_document(doc! { "a": false })
        .create();

    let err = execute(&mut cursor, &QueryOptions::default()).unwrap_err();
    assert!(matches!(err, TranscodeError::FieldTypeMismatch { .. }));
}

#[test]
fn cursor_errors_abort_the_query() {
    logging::init_for_tests();
    let input = b"{\"a\": 1}\nnot json\n".to_vec();
    let mut cursor =
        crate::engine::document::ExtJsonLinesCursor::new(std::io::Cursor::new(input));

    let err = execute(&mut cursor, &QueryOptions::default()).unwrap_err();
    assert!(matches!(err, TranscodeError::Cursor(_)));
}
