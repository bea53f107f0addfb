//! Tree annotation
//!
//! The annotator walks a tree depth-first in pre-order and injects the
//! derived fields into every node:
//!
//! - `numLeafs`: the number of direct children, `0` for a leaf
//! - `id` (optional): a sequential pre-order id starting at 0
//!
//! A node is a leaf when its children field is absent, `null` or an empty
//! array. The walk keeps its own stack of sibling iterators, so the depth of
//! the tree is bounded by memory rather than by the call stack.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, debug_span, trace};

use crate::config::AnnotateConfig;
use crate::error::{json_type_name, Result, ShapeError};
use crate::path::NodePath;

/// Counts gathered while annotating one tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnnotateReport {
    /// Total number of nodes visited
    pub nodes: usize,

    /// Nodes without children
    pub leaves: usize,

    /// Deepest level reached (the root is at depth 0)
    pub max_depth: usize,
}

/// Injects derived fields into trees according to an [`AnnotateConfig`].
///
/// The annotator holds only configuration. Every call to
/// [`annotate`](Annotator::annotate) starts a fresh id counter, so one
/// annotator can be reused across trees.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    config: AnnotateConfig,
}

impl Annotator {
    /// Create an annotator with the given configuration.
    pub fn new(config: AnnotateConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &AnnotateConfig {
        &self.config
    }

    /// Annotate `root` and every node reachable through its children, in place.
    ///
    /// # Errors
    ///
    /// Returns `NotAnObject` if the root or any child is not a JSON object.
    /// Returns `ChildrenNotArray` if a children field holds anything other
    /// than an array or `null`.
    ///
    /// The walk stops at the first error; nodes already visited keep their
    /// new fields.
    pub fn annotate(&self, root: &mut Value) -> Result<AnnotateReport> {
        Walk::new(&self.config).run(root)
    }
}

/// State owned by a single traversal.
#[derive(Debug)]
struct Walk<'c> {
    config: &'c AnnotateConfig,
    next_id: u64,
    report: AnnotateReport,
}

impl<'c> Walk<'c> {
    fn new(config: &'c AnnotateConfig) -> Self {
        Self {
            config,
            next_id: 0,
            report: AnnotateReport::default(),
        }
    }

    fn run(mut self, root: &mut Value) -> Result<AnnotateReport> {
        let _span = debug_span!("annotate", assign_ids = self.config.assign_ids).entered();

        let mut path: Vec<usize> = Vec::new();
        let mut stack = Vec::new();

        if let Some(children) = self.visit(root, &path)? {
            stack.push(children.iter_mut().enumerate());
        }

        while let Some(siblings) = stack.last_mut() {
            match siblings.next() {
                Some((index, child)) => {
                    path.truncate(stack.len() - 1);
                    path.push(index);
                    if let Some(children) = self.visit(child, &path)? {
                        stack.push(children.iter_mut().enumerate());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            nodes = self.report.nodes,
            leaves = self.report.leaves,
            max_depth = self.report.max_depth,
            "annotation complete"
        );
        Ok(self.report)
    }

    /// Annotate a single node and hand back its children for the walk.
    fn visit<'a>(
        &mut self,
        node: &'a mut Value,
        path: &[usize],
    ) -> Result<Option<&'a mut Vec<Value>>> {
        let config = self.config;
        let keys = &config.keys;

        let map: &'a mut Map<String, Value> = match node {
            Value::Object(map) => map,
            other => {
                return Err(ShapeError::NotAnObject {
                    path: self.node_path(path),
                    found: json_type_name(other),
                })
            }
        };

        let child_count = match map.get(&keys.children) {
            None | Some(Value::Null) => 0,
            Some(Value::Array(children)) => children.len(),
            Some(other) => {
                return Err(ShapeError::ChildrenNotArray {
                    path: self.node_path(path),
                    key: keys.children.clone(),
                    found: json_type_name(other),
                })
            }
        };

        if config.assign_ids {
            map.insert(keys.id.clone(), Value::from(self.next_id));
            self.next_id += 1;
        }
        map.insert(keys.num_leafs.clone(), Value::from(child_count));

        self.report.nodes += 1;
        self.report.max_depth = self.report.max_depth.max(path.len());
        trace!(depth = path.len(), children = child_count, "visit");

        if child_count == 0 {
            self.report.leaves += 1;
            return Ok(None);
        }

        match map.get_mut(&keys.children) {
            Some(Value::Array(children)) => Ok(Some(children)),
            _ => Ok(None),
        }
    }

    fn node_path(&self, path: &[usize]) -> NodePath {
        NodePath::from_indices(path.to_vec(), self.config.keys.children.clone())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Annotate a tree in place without building an [`Annotator`].
pub fn annotate(root: &mut Value, config: &AnnotateConfig) -> Result<AnnotateReport> {
    Walk::new(config).run(root)
}

/// Annotate a tree, taking and returning ownership.
pub fn annotated(mut root: Value, config: &AnnotateConfig) -> Result<Value> {
    annotate(&mut root, config)?;
    Ok(root)
}
