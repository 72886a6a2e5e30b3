use crate::test_helpers::factory::Factory;
use bson::Bson;

#[test]
fn test_series_row_factory_defaults() {
    let doc = Factory::series_row().create();

    assert!(doc.get("name").is_none());
    assert!(matches!(doc.get("ts"), Some(Bson::DateTime(_))));
    assert_eq!(doc.get("value"), Some(&Bson::Int32(1)));
}

#[test]
fn test_series_row_factory_overrides() {
    let doc = Factory::series_row()
        .with_name("cpu")
        .without_ts()
        .with_value(2.5)
        .create();

    assert_eq!(doc.get_str("name").unwrap(), "cpu");
    assert!(doc.get("ts").is_none());
    assert_eq!(doc.get("value"), Some(&Bson::Double(2.5)));
}

#[test]
fn test_series_row_factory_list_is_time_ordered() {
    let docs = Factory::series_row().with_name("cpu").create_list(5);

    let stamps: Vec<i64> = docs
        .iter()
        .map(|d| d.get_datetime("ts").unwrap().timestamp_millis())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    assert!(docs.iter().all(|d| d.get_i32("value").is_ok()));
}
