use std::io::Write;

use crate::access::NodeEdge;
use crate::error::Error;
use crate::svgvalue::{Element, Value};
use crate::svotdata::{Node, Svot};

const INDENT: &str = "    ";

/// Renders a subtree by walking its traversal edges and tracking depth.
///
/// Every child, element or text, goes on its own line one indent level
/// below its parent. An element with no children collapses to
/// `<name></name>` on a single line; the `/>` shorthand is never produced.
pub(crate) struct Serializer<'a, W: Write> {
    svot: &'a Svot,
    writer: &'a mut W,
    depth: usize,
}

impl<'a, W: Write> Serializer<'a, W> {
    pub(crate) fn new(svot: &'a Svot, writer: &'a mut W) -> Self {
        Serializer {
            svot,
            writer,
            depth: 0,
        }
    }

    /// Serialize a node and all its descendants.
    pub(crate) fn serialize_node(&mut self, node: Node) -> Result<(), Error> {
        for edge in self.svot.traverse(node) {
            match edge {
                NodeEdge::Start(current) => {
                    self.handle_edge_start(node, current)?;
                }
                NodeEdge::End(current) => {
                    self.handle_edge_end(current)?;
                }
            }
        }
        Ok(())
    }

    fn handle_edge_start(&mut self, top_node: Node, node: Node) -> Result<(), Error> {
        match self.svot.value(node) {
            Value::Root(element) | Value::Element(element) => {
                if node != top_node {
                    self.write_break()?;
                }
                self.write_start_tag(element)?;
                self.depth += 1;
            }
            Value::Text(text) => {
                if node != top_node {
                    self.write_break()?;
                }
                write!(self.writer, "{}", text.get())?;
            }
        }
        Ok(())
    }

    fn handle_edge_end(&mut self, node: Node) -> Result<(), Error> {
        if let Value::Root(element) | Value::Element(element) = self.svot.value(node) {
            self.depth -= 1;
            if self.svot.first_child(node).is_some() {
                self.write_break()?;
            }
            write!(self.writer, "</{}>", self.svot.name_str(element.name()))?;
        }
        Ok(())
    }

    fn write_start_tag(&mut self, element: &Element) -> Result<(), Error> {
        write!(self.writer, "<{}", self.svot.name_str(element.name()))?;
        for (name_id, value) in element.attributes().iter() {
            // values are emitted verbatim; reserved markup characters are
            // not escaped
            write!(self.writer, " {}=\"{}\"", self.svot.name_str(name_id), value)?;
        }
        write!(self.writer, ">")?;
        Ok(())
    }

    fn write_break(&mut self) -> Result<(), Error> {
        writeln!(self.writer)?;
        for _ in 0..self.depth {
            write!(self.writer, "{}", INDENT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use rstest::rstest;

    use crate::svotdata::Svot;

    #[rstest]
    fn empty_element(#[values("g", "defs", "circle")] name: &str) {
        let mut svot = Svot::new();
        let name_id = svot.add_name(name);
        let node = svot.new_element(name_id);
        assert_eq!(svot.to_string(node), format!("<{name}></{name}>"));
    }

    #[test]
    fn nested_elements_indent_one_level_per_depth() {
        let mut svot = Svot::new();
        let g_name = svot.add_name("g");
        let g = svot.new_element(g_name);
        let inner = svot.new_element(g_name);
        let rect = svot.new_rect(1, 2, 3, 4, "blue");
        svot.append(inner, rect).unwrap();
        svot.append(g, inner).unwrap();
        assert_snapshot!(svot.to_string(g), @r###"
<g>
    <g>
        <rect x="1" y="2" width="3" height="4" fill="blue"></rect>
    </g>
</g>
"###);
    }

    #[test]
    fn text_payload_on_own_line() {
        let mut svot = Svot::new();
        let text = svot.new_text_element(50, 70, 70, "red", "hello");
        assert_snapshot!(svot.to_string(text), @r###"
<text x="50" y="70" fontSize="70" fill="red">
    hello
</text>
"###);
    }

    #[test]
    fn markup_characters_are_not_escaped() {
        let mut svot = Svot::new();
        let text = svot.new_text_element(0, 0, 12, "a & \"b\"", "1 < 2");
        assert_snapshot!(svot.to_string(text), @r###"
<text x="0" y="0" fontSize="12" fill="a & "b"">
    1 < 2
</text>
"###);
    }
}
