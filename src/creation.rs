use crate::attributes::AttributeValue;
use crate::name::NameId;
use crate::svgvalue::{Element, Text, Value};
use crate::svotdata::{Node, Svot};

/// The namespace carried by every svg root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Creation of new nodes.
///
/// Trees are built bottom-up: create nodes here, then attach them with
/// [`Svot::append`](crate::Svot::append).
impl Svot {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena.new_node(value))
    }

    /// Create a new element node given a name.
    ///
    /// Create a name id using [`Svot::add_name`], or reuse an existing
    /// name id using [`Svot::name`].
    pub fn new_element(&mut self, name_id: NameId) -> Node {
        self.new_node(Value::Element(Element::new(name_id)))
    }

    /// Create a new text node.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string())))
    }

    /// Create the svg root element, with the fixed `xmlns` attribute
    /// already in place.
    ///
    /// ```rust
    /// let mut svot = svot::Svot::new();
    /// let root = svot.new_root();
    /// assert_eq!(
    ///     svot.get_attribute(root, "xmlns").unwrap().to_string(),
    ///     "http://www.w3.org/2000/svg"
    /// );
    /// ```
    pub fn new_root(&mut self) -> Node {
        let mut element = Element::new(self.svg_name_id);
        element
            .attributes
            .insert_if_absent(self.xmlns_name_id, SVG_NAMESPACE);
        self.new_node(Value::Root(element))
    }

    /// Create a `rect` element with the fixed position, size and fill
    /// attribute template.
    pub fn new_rect(
        &mut self,
        x: impl Into<AttributeValue>,
        y: impl Into<AttributeValue>,
        width: impl Into<AttributeValue>,
        height: impl Into<AttributeValue>,
        fill: &str,
    ) -> Node {
        let name_id = self.add_name("rect");
        let mut element = Element::new(name_id);
        let attributes = element.attributes_mut();
        attributes.insert_if_absent(self.add_name("x"), x);
        attributes.insert_if_absent(self.add_name("y"), y);
        attributes.insert_if_absent(self.add_name("width"), width);
        attributes.insert_if_absent(self.add_name("height"), height);
        attributes.insert_if_absent(self.add_name("fill"), fill);
        self.new_node(Value::Element(element))
    }

    /// Create a `text` element with the fixed position, font size and fill
    /// attribute template, holding `content` as its text payload.
    pub fn new_text_element(
        &mut self,
        x: impl Into<AttributeValue>,
        y: impl Into<AttributeValue>,
        font_size: impl Into<AttributeValue>,
        fill: &str,
        content: &str,
    ) -> Node {
        let name_id = self.add_name("text");
        let mut element = Element::new(name_id);
        let attributes = element.attributes_mut();
        attributes.insert_if_absent(self.add_name("x"), x);
        attributes.insert_if_absent(self.add_name("y"), y);
        attributes.insert_if_absent(self.add_name("fontSize"), font_size);
        attributes.insert_if_absent(self.add_name("fill"), fill);
        let element_node = self.new_node(Value::Element(element));
        let text_node = self.new_text(content);
        // both nodes are fresh, so this cannot cycle
        element_node.get().append(text_node.get(), self.arena_mut());
        element_node
    }
}
