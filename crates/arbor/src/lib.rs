//! # Arbor
//!
//! Annotates hierarchical JSON trees, as consumed by d3-style tree
//! visualizations, with derived per-node metadata.
//!
//! Every node receives a `numLeafs` field holding the number of its direct
//! children (`0` for leaves). Optionally, every node also receives an `id`
//! assigned in pre-order, starting at 0 for the root.
//!
//! ## Architecture
//!
//! - **Annotator**: iterative depth-first walk that injects the fields
//! - **Node views**: typed read access to annotated trees
//! - **Tree files**: load and save JSON documents
//! - **CLI**: argument parsing and status reporting for the `arbor` binary
//!
//! ## Example
//!
//! ```
//! use arbor::{AnnotateConfig, Annotator};
//! use serde_json::json;
//!
//! let mut tree = json!({
//!     "name": "root",
//!     "children": [{ "name": "a" }, { "name": "b", "children": [{ "name": "c" }] }]
//! });
//!
//! let report = Annotator::new(AnnotateConfig::with_ids()).annotate(&mut tree).unwrap();
//!
//! assert_eq!(report.nodes, 4);
//! assert_eq!(tree["numLeafs"], 2);
//! assert_eq!(tree["children"][1]["id"], 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod path;
pub mod tree_file;

// Re-export main types
pub use annotator::{annotate, annotated, AnnotateReport, Annotator};
pub use config::{AnnotateConfig, FieldKeys};
pub use error::{FileJobError, Result, ShapeError, TreeFileError};
pub use node::{NodeView, PreOrder};
pub use path::NodePath;
pub use tree_file::{
    annotate_file, load_tree, load_tree_with_max_nesting, save_tree, FileOutcome, DEFAULT_MAX_NESTING,
};

/// Arbor version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
