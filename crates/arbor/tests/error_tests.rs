// Coverage tests for error types and messages
use arbor::error::json_type_name;
use arbor::*;
use serde_json::json;
use std::path::PathBuf;

// ═══════════════════════════════════════════════════════════════════════
// json_type_name Coverage
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_json_type_name_scalars() {
    assert_eq!(json_type_name(&json!(null)), "null");
    assert_eq!(json_type_name(&json!(true)), "boolean");
    assert_eq!(json_type_name(&json!(1.5)), "number");
    assert_eq!(json_type_name(&json!("s")), "string");
}

#[test]
fn test_json_type_name_containers() {
    assert_eq!(json_type_name(&json!([])), "array");
    assert_eq!(json_type_name(&json!({})), "object");
}

// ═══════════════════════════════════════════════════════════════════════
// ShapeError
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_not_an_object_message() {
    let err = ShapeError::NotAnObject {
        path: NodePath::root().child(0).child(2),
        found: "string",
    };
    assert_eq!(
        err.to_string(),
        "Shape error at $.children[0].children[2]: expected an object, got string"
    );
}

#[test]
fn test_children_not_array_message() {
    let err = ShapeError::ChildrenNotArray {
        path: NodePath::root(),
        key: "children".to_string(),
        found: "number",
    };
    assert_eq!(
        err.to_string(),
        "Shape error at $: `children` must be an array, got number"
    );
}

#[test]
fn test_shape_error_uses_configured_children_key() {
    let config = AnnotateConfig::new().keys(FieldKeys::new("kids", "numLeafs", "id"));
    let mut tree = json!({ "kids": [{ "kids": [true] }] });
    let err = annotate(&mut tree, &config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Shape error at $.kids[0].kids[0]: expected an object, got boolean"
    );
}

#[test]
fn test_shape_error_path_accessor() {
    let path = NodePath::root().child(4);
    let err = ShapeError::ChildrenNotArray {
        path: path.clone(),
        key: "children".to_string(),
        found: "object",
    };
    assert_eq!(err.path(), &path);
}

// ═══════════════════════════════════════════════════════════════════════
// TreeFileError
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_not_found_message() {
    let err = TreeFileError::NotFound {
        path: PathBuf::from("trees/missing.json"),
    };
    assert_eq!(err.to_string(), "File not found: trees/missing.json");
}

#[test]
fn test_parse_error_message_names_file() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = TreeFileError::Parse {
        path: PathBuf::from("tree.json"),
        source,
    };
    let message = err.to_string();
    assert!(message.starts_with("Invalid JSON in tree.json: "));
    assert!(message.contains("line 1"));
}

#[test]
fn test_write_error_has_source() {
    use std::error::Error;

    let err = TreeFileError::Write {
        path: PathBuf::from("out.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write out.json: denied");
    assert!(err.source().is_some());
}

// ═══════════════════════════════════════════════════════════════════════
// FileJobError
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_file_job_error_is_transparent() {
    let shape: FileJobError = ShapeError::NotAnObject {
        path: NodePath::root(),
        found: "null",
    }
    .into();
    assert_eq!(
        shape.to_string(),
        "Shape error at $: expected an object, got null"
    );

    let file: FileJobError = TreeFileError::NotFound {
        path: PathBuf::from("a.json"),
    }
    .into();
    assert!(matches!(file, FileJobError::File(TreeFileError::NotFound { .. })));
    assert_eq!(file.to_string(), "File not found: a.json");
}
