use crate::attributes::{AttributeValue, Attributes};
use crate::svgvalue::{Element, Text, Value, ValueType};
use crate::svotdata::{Node, Svot};

/// Obtain node values and their types.
///
/// These are handy if you only need to match against a single value or
/// know the value type already. If you want to handle all value types,
/// use a `match` statement on [`Value`] instead.
impl Svot {
    /// Access to the value for this node.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    /// Mutable access to the value for this node.
    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }

    /// Get the [`ValueType`] of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if the node is the svg root element.
    pub fn is_root(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Root
    }

    /// Return true if the node is an element. The svg root counts as an
    /// element too.
    pub fn is_element(&self, node: Node) -> bool {
        matches!(self.value_type(node), ValueType::Root | ValueType::Element)
    }

    /// Return true if the node is text.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// If this node's value is an element (the svg root included), return
    /// a reference to it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Root(element) | Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node's value is an element (the svg root included), return
    /// a mutable reference to it.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Root(element) | Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If this node's value is text, return a reference to it.
    pub fn text(&self, node: Node) -> Option<&Text> {
        if let Value::Text(text) = self.value(node) {
            Some(text)
        } else {
            None
        }
    }

    /// If this node's value is text, return a reference to the string.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|text| text.get())
    }

    /// If this node's value is text, return a mutable reference to it.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        if let Value::Text(text) = self.value_mut(node) {
            Some(text)
        } else {
            None
        }
    }

    /// The attribute map of an element node.
    pub fn attributes(&self, node: Node) -> Option<&Attributes> {
        self.element(node).map(|element| element.attributes())
    }

    /// The mutable attribute map of an element node.
    pub fn attributes_mut(&mut self, node: Node) -> Option<&mut Attributes> {
        self.element_mut(node).map(|element| element.attributes_mut())
    }

    /// Get an attribute value of an element node by name.
    ///
    /// Returns [`None`] for text nodes and for names that are not present.
    pub fn get_attribute(&self, node: Node, name: &str) -> Option<&AttributeValue> {
        let name_id = self.name(name)?;
        self.element(node)?.get_attribute(name_id)
    }
}
