use indextree::{Arena, NodeId};

use crate::name::{NameId, NameLookup};
use crate::svgvalue::Value;

pub(crate) type SvgArena = Arena<Value>;

/// A node in the document tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Svot` struct manages all SVG tree data in your program. It lets
/// you build and serialize one or more document trees.
///
/// `Svot` is implemented in several sections focusing on different aspects
/// of accessing and manipulating the tree.
pub struct Svot {
    pub(crate) arena: SvgArena,
    pub(crate) name_lookup: NameLookup,
    pub(crate) svg_name_id: NameId,
    pub(crate) xmlns_name_id: NameId,
}

impl Svot {
    /// Create a new `Svot` instance.
    pub fn new() -> Self {
        let mut name_lookup = NameLookup::new();
        let svg_name_id = name_lookup.get_id_mut("svg");
        let xmlns_name_id = name_lookup.get_id_mut("xmlns");
        Svot {
            arena: SvgArena::new(),
            name_lookup,
            svg_name_id,
            xmlns_name_id,
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &SvgArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut SvgArena {
        &mut self.arena
    }

    /// Look up a name.
    pub fn name(&self, name: &str) -> Option<NameId> {
        self.name_lookup.get_id(name)
    }

    /// Add a name.
    /// If the name already exists, return its id.
    ///
    /// ```rust
    /// let mut svot = svot::Svot::new();
    /// let rect = svot.add_name("rect");
    /// assert_eq!(svot.name("rect"), Some(rect));
    /// assert_eq!(svot.name_str(rect), "rect");
    /// ```
    pub fn add_name(&mut self, name: &str) -> NameId {
        self.name_lookup.get_id_mut(name)
    }

    /// The string for an interned name id.
    pub fn name_str(&self, name_id: NameId) -> &str {
        self.name_lookup.get_value(name_id)
    }
}

impl Default for Svot {
    fn default() -> Self {
        Self::new()
    }
}
