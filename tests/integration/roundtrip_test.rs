//! Round-trip and preservation properties across the adapters

use pretty_assertions::assert_eq;

use svconv::formats::{markup, object, tabular};
use svconv::{convert, convert_text, ConversionConfig, Format};

fn row(pairs: &[(&str, &str)]) -> tabular::Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_tabular_roundtrip_preserves_rows() {
    let rows = vec![
        row(&[("name", "Alice"), ("age", "30"), ("note", "a,b and \"c\"")]),
        row(&[("name", "Bob"), ("age", ""), ("note", "multi\nline")]),
    ];
    let text = tabular::serialize(&rows, b',').unwrap();
    assert_eq!(tabular::parse(&text, b',').unwrap(), rows);
}

#[test]
fn test_unicode_survives_csv_json_csv() {
    let original = "name,greeting\nAlice,Grüße aus Köln ☕\n";
    let json = convert(Format::Csv, Format::Json, original).unwrap();
    assert!(json.contains("Grüße aus Köln ☕"));

    let back = convert(Format::Json, Format::Csv, &json).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_markup_key_order_roundtrip() {
    let tree = serde_json::json!({"z": 1, "a": 2, "m": 3});
    let text = markup::serialize(&tree).unwrap();
    let reparsed = markup::parse(&text).unwrap();

    let keys: Vec<&String> = reparsed.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn test_object_notation_roundtrip_keeps_order_and_values() {
    let source = r#"{"z":"last?","a":[1,2.5,true,null],"m":{"nested":"ok"}}"#;
    let tree = object::parse(source).unwrap();
    assert_eq!(object::serialize(&tree, false).unwrap(), source);
}

#[test]
fn test_json_yaml_json_roundtrip() {
    let compact = ConversionConfig::default().with_pretty(false);
    let source = r#"{"name":"Alice","age":30,"tags":["x","y"],"active":true,"score":null}"#;

    let yaml = convert(Format::Json, Format::Yaml, source).unwrap();
    let back = convert_text(Format::Yaml, Format::Json, &yaml, &compact).unwrap();
    assert_eq!(back, source);
}

#[test]
fn test_csv_yaml_csv_roundtrip() {
    let original = "id,name\n007,Bond\n42,Adams\n";
    let yaml = convert(Format::Csv, Format::Yaml, original).unwrap();

    // numeric-looking cells stay quoted text in the markup
    let tree = markup::parse(&yaml).unwrap();
    assert!(tree[0]["id"].is_string());

    let back = convert(Format::Yaml, Format::Csv, &yaml).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_empty_csv_stays_empty() {
    assert_eq!(convert(Format::Csv, Format::Json, "").unwrap(), "[]");
    // and an empty row set writes no header line
    assert_eq!(tabular::serialize(&[], b',').unwrap(), "");
}
