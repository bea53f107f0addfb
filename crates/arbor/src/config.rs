//! Annotation configuration

/// Default key holding a node's children.
pub const DEFAULT_CHILDREN_KEY: &str = "children";

/// Default key for the injected child count.
///
/// The name reads like "leaves in the subtree", but the value is the number
/// of *direct* children. Downstream visualizations depend on this name.
pub const DEFAULT_NUM_LEAFS_KEY: &str = "numLeafs";

/// Default key for the injected pre-order id.
pub const DEFAULT_ID_KEY: &str = "id";

/// Names of the fields the annotator reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKeys {
    /// Field holding the ordered child nodes
    pub children: String,

    /// Field receiving the direct child count
    pub num_leafs: String,

    /// Field receiving the pre-order id
    pub id: String,
}

impl Default for FieldKeys {
    fn default() -> Self {
        Self {
            children: DEFAULT_CHILDREN_KEY.to_string(),
            num_leafs: DEFAULT_NUM_LEAFS_KEY.to_string(),
            id: DEFAULT_ID_KEY.to_string(),
        }
    }
}

impl FieldKeys {
    /// Create a key set with explicit names.
    pub fn new(
        children: impl Into<String>,
        num_leafs: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            children: children.into(),
            num_leafs: num_leafs.into(),
            id: id.into(),
        }
    }
}

/// Configuration for one or more annotation passes.
///
/// The configuration carries no traversal state; the id counter lives
/// inside each `annotate` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotateConfig {
    /// Inject a pre-order `id` into every node in addition to `numLeafs`
    pub assign_ids: bool,

    /// Field names used for reading and writing
    pub keys: FieldKeys,
}

impl AnnotateConfig {
    /// Create a configuration with default settings (child counts only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that also assigns pre-order ids.
    pub fn with_ids() -> Self {
        Self {
            assign_ids: true,
            ..Default::default()
        }
    }

    /// Set whether ids are assigned.
    pub fn assign_ids(mut self, assign_ids: bool) -> Self {
        self.assign_ids = assign_ids;
        self
    }

    /// Replace the field names.
    pub fn keys(mut self, keys: FieldKeys) -> Self {
        self.keys = keys;
        self
    }
}
