//! Locations of nodes inside a tree

use std::fmt;

use crate::config::DEFAULT_CHILDREN_KEY;

/// The location of a node, as child indices walked from the root.
///
/// Renders as `$` for the root and `$.children[1].children[0]` for
/// descendants, using whichever children key the tree was walked with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    indices: Vec<usize>,
    children_key: String,
}

impl Default for NodePath {
    fn default() -> Self {
        Self::root()
    }
}

impl NodePath {
    /// The path of the root node.
    pub fn root() -> Self {
        Self::from_indices(Vec::new(), DEFAULT_CHILDREN_KEY)
    }

    /// Build a path from child indices and the key children live under.
    pub fn from_indices(indices: Vec<usize>, children_key: impl Into<String>) -> Self {
        Self {
            indices,
            children_key: children_key.into(),
        }
    }

    /// Child indices from the root, outermost first.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Whether this path points at the root.
    pub fn is_root(&self) -> bool {
        self.indices.is_empty()
    }

    /// The path of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.indices.len() + 1);
        indices.extend_from_slice(&self.indices);
        indices.push(index);
        Self {
            indices,
            children_key: self.children_key.clone(),
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for index in &self.indices {
            write!(f, ".{}[{}]", self.children_key, index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_display() {
        let path = NodePath::root();
        assert!(path.is_root());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "$");
    }

    #[test]
    fn test_child_path_display() {
        let path = NodePath::root().child(1).child(0);
        assert_eq!(path.indices(), &[1, 0]);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.to_string(), "$.children[1].children[0]");
    }

    #[test]
    fn test_custom_children_key_display() {
        let path = NodePath::from_indices(vec![2], "_children");
        assert_eq!(path.to_string(), "$._children[2]");
        assert_eq!(path.child(3).to_string(), "$._children[2]._children[3]");
    }
}
