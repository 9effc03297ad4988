//! End-to-end coverage of the six-entry transform matrix and its shape policy

use pretty_assertions::assert_eq;
use serde_json::json;

use svconv::{convert, convert_text, ConversionConfig, ConvertError, Format};

#[test]
fn test_csv_to_json_rows_stay_text() {
    let out = convert(Format::Csv, Format::Json, "id,name\n1,Alice\n2,Bob\n").unwrap();
    let tree: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        tree,
        json!([
            {"id": "1", "name": "Alice"},
            {"id": "2", "name": "Bob"}
        ])
    );
    assert!(tree[0]["id"].is_string());
}

#[test]
fn test_csv_to_yaml() {
    let out = convert(Format::Csv, Format::Yaml, "name,city\nAlice,Köln\n").unwrap();
    assert_eq!(out, "- name: Alice\n  city: Köln\n");
}

#[test]
fn test_json_to_csv_array_of_objects() {
    let out = convert(
        Format::Json,
        Format::Csv,
        r#"[{"name":"Alice","age":30},{"name":"Bob","age":25}]"#,
    )
    .unwrap();
    assert_eq!(out, "name,age\nAlice,30\nBob,25\n");
}

#[test]
fn test_json_to_csv_single_object_promotion() {
    let out = convert(Format::Json, Format::Csv, r#"{"x":1,"y":2}"#).unwrap();
    assert_eq!(out, "x,y\n1,2\n");
}

#[test]
fn test_json_to_csv_union_header() {
    let out = convert(Format::Json, Format::Csv, r#"[{"a":"1"},{"b":"2"}]"#).unwrap();
    assert_eq!(out, "a,b\n1,\n,2\n");
}

#[test]
fn test_json_to_yaml() {
    let out = convert(
        Format::Json,
        Format::Yaml,
        r#"{"name":"Alice","langs":["de","fr"]}"#,
    )
    .unwrap();
    assert_eq!(out, "name: Alice\nlangs:\n- de\n- fr\n");
}

#[test]
fn test_yaml_to_json_passes_any_shape() {
    // a bare scalar is fine when no reconciliation is involved
    let out = convert_text(
        Format::Yaml,
        Format::Json,
        "42\n",
        &ConversionConfig::default().with_pretty(false),
    )
    .unwrap();
    assert_eq!(out, "42");
}

#[test]
fn test_yaml_to_csv_sequence_of_mappings() {
    let out = convert(
        Format::Yaml,
        Format::Csv,
        "- name: Alice\n  role: admin\n- name: Bob\n  role: user\n",
    )
    .unwrap();
    assert_eq!(out, "name,role\nAlice,admin\nBob,user\n");
}

#[test]
fn test_yaml_to_csv_single_mapping_promotion() {
    let out = convert(Format::Yaml, Format::Csv, "a: 1\nb: 2\n").unwrap();
    assert_eq!(out, "a,b\n1,2\n");
}

#[test]
fn test_identity_returns_input_unchanged() {
    let invalid = "][ not valid anywhere }{";
    for format in [Format::Csv, Format::Json, Format::Yaml] {
        assert_eq!(convert(format, format, invalid).unwrap(), invalid);
    }
}

#[test]
fn test_scalar_json_to_csv_is_shape_error() {
    let err = convert(Format::Json, Format::Csv, "42").unwrap_err();
    assert!(matches!(err, ConvertError::Shape(_)));
}

#[test]
fn test_mixed_array_to_csv_is_shape_error() {
    let err = convert(Format::Json, Format::Csv, r#"[{"a":1},7]"#).unwrap_err();
    assert!(matches!(err, ConvertError::Shape(_)));
}

#[test]
fn test_yaml_scalar_to_csv_is_shape_error() {
    let err = convert(Format::Yaml, Format::Csv, "just a string\n").unwrap_err();
    assert!(matches!(err, ConvertError::Shape(_)));
}

#[test]
fn test_malformed_source_is_parse_error() {
    let err = convert(Format::Json, Format::Yaml, "{broken").unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
}

#[test]
fn test_pretty_toggle() {
    let compact = convert_text(
        Format::Yaml,
        Format::Json,
        "a: 1\n",
        &ConversionConfig::default().with_pretty(false),
    )
    .unwrap();
    assert_eq!(compact, r#"{"a":1}"#);
    assert_eq!(compact.lines().count(), 1);

    let pretty = convert_text(
        Format::Yaml,
        Format::Json,
        "a: 1\n",
        &ConversionConfig::default().with_pretty(true),
    )
    .unwrap();
    assert_eq!(pretty, "{\n  \"a\": 1\n}");
}

#[test]
fn test_delimiter_override_both_sides() {
    let config = ConversionConfig::default().with_delimiter(b'\t');
    let csv = convert_text(
        Format::Json,
        Format::Csv,
        r#"[{"a":"1","b":"2"}]"#,
        &config,
    )
    .unwrap();
    assert_eq!(csv, "a\tb\n1\t2\n");

    let back = convert_text(Format::Csv, Format::Json, &csv, &config).unwrap();
    let tree: serde_json::Value = serde_json::from_str(&back).unwrap();
    assert_eq!(tree, json!([{"a": "1", "b": "2"}]));
}

#[test]
fn test_nested_values_land_as_compact_json_cells() {
    let out = convert(
        Format::Json,
        Format::Csv,
        r#"{"name":"Alice","tags":["a","b"],"meta":null}"#,
    )
    .unwrap();
    assert_eq!(out, "name,tags,meta\nAlice,\"[\"\"a\"\",\"\"b\"\"]\",\n");
}

#[test]
fn test_yaml_multidoc_first_document_wins() {
    let out = convert(Format::Yaml, Format::Csv, "a: 1\n---\nb: 2\n").unwrap();
    assert_eq!(out, "a\n1\n");
}
