//! Document tree for the marten markup parser.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships: every node lives in a vector owned by the tree, and
//! parent/child edges are expressed as indices into that vector. This gives
//! O(1) access to any node, keeps ownership strictly hierarchical (dropping
//! the tree drops every subtree), and makes the parent back-reference a
//! plain index rather than a pointer that could dangle.
//!
//! Unlike a full DOM, a node here is just a tag name, its accumulated text
//! content, and its ordered children. The parser discards attribute-like
//! content inside tags, so nodes carry no attribute map.

use serde::Serialize;

/// A type-safe index into the document tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing
/// issues. Ids are only meaningful for the tree that allocated them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic document root is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// One markup element, or the synthetic document root.
///
/// `text` is the character content directly inside this element (not inside
/// its descendants). The parser appends to it in possibly multiple runs, so
/// an element interleaved with child elements accumulates all of its own
/// text runs concatenated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// The element's tag name; empty for the document root.
    pub tag: String,

    /// Accumulated text content, built by appends during parsing.
    pub text: String,

    /// Back-reference to the enclosing node, or `None` for the root.
    /// This is a relation only, never an ownership edge.
    pub parent: Option<NodeId>,

    /// Ordered children; insertion order is document order.
    pub children: Vec<NodeId>,
}

/// Arena-based document tree with O(1) node access.
///
/// All nodes live in a contiguous vector, with the document root at
/// [`NodeId::ROOT`]. The tree exclusively owns its nodes in a strict
/// hierarchy; the only cross-link is each node's parent back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The root node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DocumentTree {
    /// Create a new tree containing just the unnamed document root.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            tag: String::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        };
        DocumentTree { nodes: vec![root] }
    }

    /// Get the root node ID.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree, the root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (it never is: the root always exists).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node with the given tag and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_string(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// If `child` is currently attached to any parent it is detached first,
    /// so a node is moved rather than duplicated and no node ever appears in
    /// a children list while its parent reference points elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if either ID was not allocated by this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.nodes[child.0].parent {
            self.remove_child(old_parent, child);
        }

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Detach `child` from `parent`, clearing its parent reference.
    ///
    /// The node itself stays allocated in the arena; only the edge is
    /// removed. Does nothing to the children list if `child` was not a
    /// child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either ID was not allocated by this tree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.retain(|&id| id != child);
        self.nodes[child.0].parent = None;
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get a node's tag name.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.tag.as_str())
    }

    /// Set a node's tag name.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not allocated by this tree.
    pub fn set_tag(&mut self, id: NodeId, tag: &str) {
        self.nodes[id.0].tag = tag.to_string();
    }

    /// Get a node's accumulated text content.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.text.as_str())
    }

    /// Append a run of text to a node's existing content.
    ///
    /// Runs concatenate with no separator: a node visited by two separate
    /// text runs ends up with both, back to back.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not allocated by this tree.
    pub fn append_text(&mut self, id: NodeId, run: &str) {
        self.nodes[id.0].text.push_str(run);
    }
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}
