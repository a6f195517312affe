use crate::attributes::AttributeValue;
use crate::svotdata::{Node, Svot};

/// Attribute updates by name.
///
/// These intern the name and operate on the node's attribute map. None of
/// them can fail: updates on a text node, duplicate additions and removals
/// of absent names are all no-ops, reported through the return value only.
impl Svot {
    /// Add an attribute with the given name and value to this node if it
    /// does not exist.
    ///
    /// Returns whether the attribute was added.
    ///
    /// ```rust
    /// let mut svot = svot::Svot::new();
    /// let root = svot.new_root();
    /// assert!(svot.add_attribute_if_absent(root, "width", 800));
    /// assert!(!svot.add_attribute_if_absent(root, "width", 999));
    /// assert_eq!(svot.get_attribute(root, "width").unwrap().to_string(), "800");
    /// ```
    pub fn add_attribute_if_absent(
        &mut self,
        node: Node,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> bool {
        let name_id = self.add_name(name);
        match self.attributes_mut(node) {
            Some(attributes) => attributes.insert_if_absent(name_id, value),
            None => false,
        }
    }

    /// Set the value of the attribute with the given name, creating it if
    /// it does not exist.
    pub fn set_attribute(&mut self, node: Node, name: &str, value: impl Into<AttributeValue>) {
        let name_id = self.add_name(name);
        if let Some(attributes) = self.attributes_mut(node) {
            attributes.insert(name_id, value);
        }
    }

    /// Add every name/value pair as an attribute, in iteration order,
    /// skipping names that already exist.
    ///
    /// Returns the number of attributes actually added; skipped duplicates
    /// are not counted.
    pub fn add_attributes<'a, I, V>(&mut self, node: Node, pairs: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<AttributeValue>,
    {
        let mut count = 0;
        for (name, value) in pairs {
            if self.add_attribute_if_absent(node, name, value) {
                count += 1;
            }
        }
        count
    }

    /// Remove the named attributes if they exist.
    ///
    /// Returns the number of attributes actually removed; names that are
    /// not present, including duplicate and unknown names, are not counted
    /// and do not error.
    pub fn remove_attributes<'a, I>(&mut self, node: Node, names: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut count = 0;
        for name in names {
            let Some(name_id) = self.name(name) else {
                continue;
            };
            if let Some(attributes) = self.attributes_mut(node) {
                if attributes.remove(name_id).is_some() {
                    count += 1;
                }
            }
        }
        count
    }
}
