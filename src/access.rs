use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::svotdata::{Node, Svot};

/// Node edges.
///
/// Used by [`Svot::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element this is the start
    /// tag.
    Start(Node),
    /// The end edge of a node. In case of an element this is the end tag.
    /// For text the end edge occurs immediately after the start edge.
    End(Node),
}

/// ## Read-only access
impl Svot {
    /// Get parent node.
    ///
    /// Returns [`None`] if this node is not attached to a parent.
    ///
    /// ```rust
    /// let mut svot = svot::Svot::new();
    /// let root = svot.new_root();
    /// let rect = svot.new_rect(0, 0, 10, 10, "blue");
    /// svot.append(root, rect)?;
    /// assert_eq!(svot.parent(rect), Some(root));
    /// assert_eq!(svot.parent(root), None);
    /// # Ok::<(), svot::Error>(())
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if there is no next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    ///
    /// Returns [`None`] if there is no previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the child nodes of this node.
    ///
    /// ```rust
    /// let mut svot = svot::Svot::new();
    /// let root = svot.new_root();
    /// let a = svot.new_rect(0, 0, 10, 10, "blue");
    /// let b = svot.new_rect(20, 0, 10, 10, "red");
    /// svot.append(root, a)?;
    /// svot.append(root, b)?;
    /// assert_eq!(svot.children(root).collect::<Vec<_>>(), vec![a, b]);
    /// # Ok::<(), svot::Error>(())
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over the descendants of this node, including this one,
    /// in document order (pre-order depth-first).
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse over the start and end edges of the nodes of a subtree.
    ///
    /// The serializer is driven by this traversal: an element's start tag
    /// is emitted on its start edge and its end tag on its end edge.
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }
}
