//! Loading and saving tree documents
//!
//! Trees are stored as UTF-8 JSON. Output is pretty-printed with two-space
//! indentation, keeps non-ASCII characters as-is and has no trailing
//! newline. Object keys keep their input order.
//!
//! Parsing grows the stack on demand, so the parser's nesting limit does not
//! apply. Serializing and dropping a `Value` still recurse once per nesting
//! level, so documents are capped at a configurable nesting depth instead.
//! Each tree level takes two levels of JSON nesting (the node object and its
//! children array).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::annotator::{AnnotateReport, Annotator};
use crate::error::{FileJobError, TreeFileError};

/// Default cap on JSON nesting, about 2000 tree levels.
pub const DEFAULT_MAX_NESTING: usize = 4096;

/// Result of [`annotate_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Where the annotated tree was written
    pub output: PathBuf,

    /// Counts from the annotation pass
    pub report: AnnotateReport,
}

/// Read and parse a tree document, nested at most [`DEFAULT_MAX_NESTING`] deep.
///
/// # Errors
///
/// Returns `NotFound` if the file does not exist, `Read` for any other I/O
/// failure, `Parse` if the contents are not valid JSON and `TooDeep` if the
/// document nests deeper than the limit.
pub fn load_tree(path: impl AsRef<Path>) -> Result<Value, TreeFileError> {
    load_tree_with_max_nesting(path, DEFAULT_MAX_NESTING)
}

/// Read and parse a tree document with an explicit nesting cap.
pub fn load_tree_with_max_nesting(
    path: impl AsRef<Path>,
    max_nesting: usize,
) -> Result<Value, TreeFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TreeFileError::NotFound {
            path: path.to_path_buf(),
        },
        _ => TreeFileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let tree = parse_unbounded(&text).map_err(|source| TreeFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if nesting_depth(&tree) > max_nesting {
        warn!(path = %path.display(), limit = max_nesting, "tree nests too deep");
        release(tree);
        return Err(TreeFileError::TooDeep {
            path: path.to_path_buf(),
            limit: max_nesting,
        });
    }

    info!(path = %path.display(), bytes = text.len(), "loaded tree");
    Ok(tree)
}

/// Write a tree document, replacing any existing file.
///
/// # Errors
///
/// Returns `TooDeep` if the tree nests deeper than [`DEFAULT_MAX_NESTING`]
/// (nothing is written), or `Write` if the file cannot be created or written.
pub fn save_tree(path: impl AsRef<Path>, tree: &Value) -> Result<(), TreeFileError> {
    let path = path.as_ref();
    if nesting_depth(tree) > DEFAULT_MAX_NESTING {
        return Err(TreeFileError::TooDeep {
            path: path.to_path_buf(),
            limit: DEFAULT_MAX_NESTING,
        });
    }

    let write_error = |source: io::Error| TreeFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    serde_json::to_writer_pretty(&mut writer, tree)
        .map_err(|err| write_error(io::Error::from(err)))?;
    writer.flush().map_err(write_error)?;

    info!(path = %path.display(), "saved tree");
    Ok(())
}

/// Load `input`, annotate it and write the result.
///
/// The result goes to `output`, or back over `input` when `output` is
/// `None`. Nothing is written if loading or annotating fails.
pub fn annotate_file(
    input: impl AsRef<Path>,
    output: Option<&Path>,
    annotator: &Annotator,
) -> Result<FileOutcome, FileJobError> {
    let input = input.as_ref();
    let mut tree = load_tree(input)?;
    let report = annotator.annotate(&mut tree)?;

    let output = output.unwrap_or(input).to_path_buf();
    save_tree(&output, &tree)?;

    Ok(FileOutcome { output, report })
}

/// Maximum container nesting of a JSON value; scalars are at depth 0.
pub fn nesting_depth(value: &Value) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(value, 1)];

    while let Some((value, depth)) = pending.pop() {
        match value {
            Value::Array(items) => {
                deepest = deepest.max(depth);
                pending.extend(items.iter().map(|item| (item, depth + 1)));
            }
            Value::Object(map) => {
                deepest = deepest.max(depth);
                pending.extend(map.values().map(|item| (item, depth + 1)));
            }
            _ => {}
        }
    }
    deepest
}

/// Parse JSON without the parser's recursion limit.
fn parse_unbounded(text: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let tree = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(tree)
}

/// Drop a value one container at a time.
fn release(value: Value) {
    let mut pending = vec![value];
    while let Some(mut value) = pending.pop() {
        match &mut value {
            Value::Array(items) => pending.append(items),
            Value::Object(map) => {
                pending.extend(std::mem::take(map).into_iter().map(|(_, item)| item))
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nesting_depth() {
        assert_eq!(nesting_depth(&json!(1)), 0);
        assert_eq!(nesting_depth(&json!({})), 1);
        assert_eq!(nesting_depth(&json!({ "children": [{ "name": "a" }] })), 3);
        assert_eq!(nesting_depth(&json!([[], [[{}]]])), 4);
    }

    #[test]
    fn test_parse_unbounded_rejects_trailing_text() {
        assert!(parse_unbounded(r#"{"name":"x"} trailing"#).is_err());
        assert_eq!(parse_unbounded(" {} \n").unwrap(), json!({}));
    }

    #[test]
    fn test_release_deep_chain() {
        let mut value = json!(null);
        for _ in 0..100_000 {
            value = Value::Array(vec![value]);
        }
        release(value);
    }
}
