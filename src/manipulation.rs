use crate::error::Error;
use crate::name::NameId;
use crate::svgvalue::ValueType;
use crate::svotdata::{Node, Svot};

/// Manipulation of the tree structure.
///
/// This maintains the document structure:
/// - Only elements can have children; you cannot add a node to a text
///   node.
/// - The svg root element cannot become a child of another node.
/// - The tree stays acyclic: a node can never be appended below itself.
///
/// There is no detach or remove operation; trees are built bottom-up and
/// attached once.
impl Svot {
    /// Append a child to the end of the children of the given parent.
    ///
    /// It is now the new last node of the parent.
    ///
    /// ```rust
    /// let mut svot = svot::Svot::new();
    /// let root = svot.new_root();
    /// let circle_name = svot.add_name("circle");
    /// let circle = svot.new_element(circle_name);
    /// svot.append(root, circle)?;
    /// assert_eq!(svot.parent(circle), Some(root));
    /// # Ok::<(), svot::Error>(())
    /// ```
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Append a new element node to a parent node given a name.
    ///
    /// Returns the new node.
    pub fn append_element(&mut self, parent: Node, name_id: NameId) -> Result<Node, Error> {
        let element_node = self.new_element(name_id);
        self.append(parent, element_node)?;
        Ok(element_node)
    }

    /// Append a new text node to a parent node given text.
    ///
    /// Returns the new node.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let text_node = self.new_text(text);
        self.append(parent, text_node)?;
        Ok(text_node)
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        if !self.is_element(parent) {
            return Err(Error::InvalidOperation(
                "cannot append children to a text node".into(),
            ));
        }
        if self.value_type(child) == ValueType::Root {
            return Err(Error::InvalidOperation(
                "cannot append the svg root as a child".into(),
            ));
        }
        // ancestors includes the parent itself, so self-appends are caught here too
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::InvalidOperation(
                "cannot append an ancestor as a child".into(),
            ));
        }
        Ok(())
    }
}
