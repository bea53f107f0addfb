//! Typed read access to tree nodes

use serde_json::Value;

use crate::config::FieldKeys;

/// A read-only view of one node of a JSON tree.
///
/// Lookups never fail: a missing or mistyped field reads as `None`, and a
/// missing or mistyped children field reads as no children.
///
/// # Example
///
/// ```
/// use arbor::{FieldKeys, NodeView};
/// use serde_json::json;
///
/// let keys = FieldKeys::default();
/// let tree = json!({ "name": "root", "numLeafs": 1, "children": [{ "name": "a" }] });
/// let root = NodeView::new(&tree, &keys);
///
/// assert_eq!(root.name(), Some("root"));
/// assert_eq!(root.num_leafs(), Some(1));
/// assert_eq!(root.children().count(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    value: &'a Value,
    keys: &'a FieldKeys,
}

impl<'a> NodeView<'a> {
    /// Wrap a JSON value.
    pub fn new(value: &'a Value, keys: &'a FieldKeys) -> Self {
        Self { value, keys }
    }

    /// The underlying JSON value.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Look up an arbitrary field.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.value.get(name)
    }

    /// The `name` field, if it is a string.
    pub fn name(&self) -> Option<&'a str> {
        self.field("name").and_then(Value::as_str)
    }

    /// The child nodes, in order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeView<'a>> + ExactSizeIterator {
        let keys = self.keys;
        self.child_values()
            .iter()
            .map(move |child| NodeView::new(child, keys))
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.child_values().is_empty()
    }

    /// The injected child count.
    pub fn num_leafs(&self) -> Option<u64> {
        self.field(&self.keys.num_leafs).and_then(Value::as_u64)
    }

    /// The injected pre-order id.
    pub fn id(&self) -> Option<u64> {
        self.field(&self.keys.id).and_then(Value::as_u64)
    }

    /// Iterate over this node and all of its descendants in pre-order.
    pub fn pre_order(&self) -> PreOrder<'a> {
        PreOrder { stack: vec![*self] }
    }

    fn child_values(&self) -> &'a [Value] {
        self.field(&self.keys.children)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Pre-order iterator over a subtree, created by [`NodeView::pre_order`].
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<NodeView<'a>>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}
