use json_tree::{from_file, from_str, JsonError, JsonValue};

#[test]
fn missing_file_reads_as_null() {
    let doc = from_file("does-not-exist.json").expect("lenient open");
    assert_eq!(doc, JsonValue::Null);
}

#[test]
fn malformed_file_content_still_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "nul").expect("write fixture");
    assert!(matches!(
        from_file(&path).unwrap_err(),
        JsonError::MisspelledLiteral {
            expected: "null",
            ..
        }
    ));
}

#[test]
fn write_into_missing_directory_fails_loudly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no-such-dir").join("out.json");
    let err = JsonValue::Bool(true).write_to_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("could not write to file"));
    match err {
        JsonError::WriteFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected WriteFile, got {other:?}"),
    }
}

#[test]
fn document_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("doc.json");

    let doc = from_str(r#"{"name": "widget", "sizes": [1, 2, 3], "live": true}"#).expect("decode");
    doc.write_to_file(&path).expect("save");

    let reread = from_file(&path).expect("load");
    assert_eq!(reread, doc);
}
