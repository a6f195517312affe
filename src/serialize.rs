use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::serializer::Serializer;
use crate::svgvalue::ValueType;
use crate::svotdata::{Node, Svot};

pub(crate) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
pub(crate) const LICENSE_COMMENT: &str = "<!-- Licensed under the MIT License. -->";

/// ## Serialization
impl Svot {
    /// Serialize a node and all its descendants to a writer.
    ///
    /// The svg root element is preceded by the fixed two-line document
    /// preamble: the XML declaration and the license comment. Any other
    /// node serializes as a bare fragment.
    pub fn serialize(&self, node: Node, w: &mut impl Write) -> Result<(), Error> {
        if self.value_type(node) == ValueType::Root {
            writeln!(w, "{}", XML_DECLARATION)?;
            writeln!(w, "{}", LICENSE_COMMENT)?;
        }
        let mut serializer = Serializer::new(self, w);
        serializer.serialize_node(node)
    }

    /// Serialize a node and all its descendants to a string.
    ///
    /// Serialization is a pure function of the tree state; it does not
    /// mutate and it cannot fail.
    ///
    /// ```rust
    /// let mut svot = svot::Svot::new();
    /// let root = svot.new_root();
    /// assert_eq!(
    ///     svot.to_string(root),
    ///     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
    ///      <!-- Licensed under the MIT License. -->\n\
    ///      <svg xmlns=\"http://www.w3.org/2000/svg\"></svg>"
    /// );
    /// ```
    pub fn to_string(&self, node: Node) -> String {
        let mut buf = Vec::new();
        self.serialize(node, &mut buf)
            .expect("writing to an in-memory buffer cannot fail");
        String::from_utf8(buf).expect("serialized output is valid utf-8")
    }

    /// Serialize the svg root element, preamble included, into a file at
    /// `path`.
    ///
    /// Only the svg root element can be written; for any other node this
    /// returns [`Error::NotRoot`]. Errors from the sink are propagated,
    /// never swallowed. The write is a single shot: there is no retry and
    /// no timeout.
    pub fn write(&self, node: Node, path: impl AsRef<Path>) -> Result<(), Error> {
        if self.value_type(node) != ValueType::Root {
            return Err(Error::NotRoot(node));
        }
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        self.serialize(node, &mut w)?;
        w.flush()?;
        Ok(())
    }
}
