//! Error types for Arbor

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::path::NodePath;

/// A node whose structure is not a tree node.
///
/// Raised as soon as the walk reaches the offending node. Nodes visited
/// earlier are already annotated; the tree should be discarded.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A node (the root, or an entry of a children array) is not an object
    #[error("Shape error at {path}: expected an object, got {found}")]
    NotAnObject {
        /// Location of the offending value
        path: NodePath,
        /// JSON type actually found
        found: &'static str,
    },

    /// The children field is present but is not an array
    #[error("Shape error at {path}: `{key}` must be an array, got {found}")]
    ChildrenNotArray {
        /// Location of the node owning the field
        path: NodePath,
        /// Name of the children field
        key: String,
        /// JSON type actually found
        found: &'static str,
    },
}

impl ShapeError {
    /// Location of the node that failed the shape check.
    pub fn path(&self) -> &NodePath {
        match self {
            ShapeError::NotAnObject { path, .. } | ShapeError::ChildrenNotArray { path, .. } => {
                path
            }
        }
    }
}

/// Failure reading or writing a tree document.
#[derive(Error, Debug)]
pub enum TreeFileError {
    /// The input file does not exist
    #[error("File not found: {}", .path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// The input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Requested path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The input file is not valid JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        /// Requested path
        path: PathBuf,
        /// Parser diagnostic, including line and column
        source: serde_json::Error,
    },

    /// The document nests deeper than the configured limit
    #[error("Too deep: {} nests more than {limit} levels", .path.display())]
    TooDeep {
        /// Requested path
        path: PathBuf,
        /// Maximum JSON nesting accepted
        limit: usize,
    },

    /// The output file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}

/// Failure of a load, annotate, save job.
#[derive(Error, Debug)]
pub enum FileJobError {
    /// Reading or writing failed
    #[error(transparent)]
    File(#[from] TreeFileError),

    /// The document is not a well-formed tree
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Result type alias for annotation operations
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Get the JSON type name of a value (for error messages).
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
