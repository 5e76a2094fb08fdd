use super::{FallbackLookup, ProductLookup, ProductRecord};

#[tokio::test]
async fn fallback_lookup_builds_search_page_record() {
    let record = FallbackLookup.search("blue jeans").await.unwrap();
    assert_eq!(record.name, "blue jeans");
    assert_eq!(record.description, "No detailed data found for 'blue jeans'");
    assert_eq!(
        record.url_content.as_deref(),
        Some("https://www.asos.com/search/?q=blue+jeans")
    );
    assert!(record.image.is_none());
    assert!(record.gender.is_none());
}

#[test]
fn record_serialization_omits_absent_fields() {
    let record = ProductRecord {
        name: "Jeans".to_string(),
        description: "d".to_string(),
        url_content: Some("http://x".to_string()),
        image: None,
        gender: None,
    };
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"name":"Jeans","description":"d","url_content":"http://x"}"#
    );
}

#[test]
fn record_deserializes_without_optional_fields() {
    let record: ProductRecord =
        serde_json::from_str(r#"{"name":"Jeans","description":"d"}"#).unwrap();
    assert_eq!(record.name, "Jeans");
    assert!(record.url_content.is_none());
}
