use crate::test_helpers::factory::Factory;
use bson::Bson;

#[test]
fn test_document_factory() {
    let doc = Factory::document()
        .with("a", 1)
        .with("b", "two")
        .with_null("c")
        .create();

    assert_eq!(doc.get("a"), Some(&Bson::Int32(1)));
    assert_eq!(doc.get_str("b").unwrap(), "two");
    assert_eq!(doc.get("c"), Some(&Bson::Null));
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn test_document_factory_list_is_indexed() {
    let docs = Factory::document().with("kind", "x").create_list(3);

    assert_eq!(docs.len(), 3);
    for (i, doc) in docs.iter().enumerate() {
        assert_eq!(doc.get_i32("index").unwrap(), i as i32);
        assert_eq!(doc.get_str("kind").unwrap(), "x");
    }
}
