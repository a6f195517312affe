use svot::{Error, Svot};

#[test]
fn test_append_preserves_order() {
    let mut svot = Svot::new();
    let root = svot.new_root();
    let name = svot.add_name("rect");
    let a = svot.new_element(name);
    let b = svot.new_element(name);
    let c = svot.new_element(name);
    svot.append(root, a).unwrap();
    svot.append(root, b).unwrap();
    svot.append(root, c).unwrap();
    assert_eq!(svot.children(root).collect::<Vec<_>>(), vec![a, b, c]);
    assert_eq!(svot.first_child(root), Some(a));
    assert_eq!(svot.last_child(root), Some(c));
}

#[test]
fn test_append_element_and_text_return_new_nodes() {
    let mut svot = Svot::new();
    let root = svot.new_root();
    let name = svot.add_name("g");
    let g = svot.append_element(root, name).unwrap();
    let text = svot.append_text(g, "hello").unwrap();
    assert_eq!(svot.parent(g), Some(root));
    assert_eq!(svot.parent(text), Some(g));
    assert_eq!(svot.text_str(text), Some("hello"));
}

#[test]
fn test_append_to_text_is_rejected() {
    let mut svot = Svot::new();
    let text = svot.new_text("hello");
    let name = svot.add_name("rect");
    let rect = svot.new_element(name);
    assert!(matches!(
        svot.append(text, rect),
        Err(Error::InvalidOperation(_))
    ));
}

#[test]
fn test_append_root_as_child_is_rejected() {
    let mut svot = Svot::new();
    let root = svot.new_root();
    let name = svot.add_name("g");
    let g = svot.new_element(name);
    assert!(matches!(
        svot.append(g, root),
        Err(Error::InvalidOperation(_))
    ));
}

#[test]
fn test_append_ancestor_is_rejected() {
    let mut svot = Svot::new();
    let name = svot.add_name("g");
    let outer = svot.new_element(name);
    let inner = svot.new_element(name);
    svot.append(outer, inner).unwrap();
    assert!(matches!(
        svot.append(inner, outer),
        Err(Error::InvalidOperation(_))
    ));
}

#[test]
fn test_append_self_is_rejected() {
    let mut svot = Svot::new();
    let name = svot.add_name("g");
    let g = svot.new_element(name);
    assert!(matches!(svot.append(g, g), Err(Error::InvalidOperation(_))));
}
