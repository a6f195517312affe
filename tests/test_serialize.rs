use svot::{Error, Svot};

#[test]
fn test_empty_element_collapses_to_open_close_pair() {
    let mut svot = Svot::new();
    let name = svot.add_name("g");
    let g = svot.new_element(name);
    assert_eq!(svot.to_string(g), "<g></g>");
}

#[test]
fn test_children_are_indented_in_insertion_order() {
    let mut svot = Svot::new();
    let g_name = svot.add_name("g");
    let g = svot.new_element(g_name);
    let first = svot.new_rect(0, 0, 10, 10, "blue");
    let second = svot.new_rect(20, 0, 10, 10, "red");
    svot.append(g, first).unwrap();
    svot.append(g, second).unwrap();

    let expected = r#"<g>
    <rect x="0" y="0" width="10" height="10" fill="blue"></rect>
    <rect x="20" y="0" width="10" height="10" fill="red"></rect>
</g>"#;
    assert_eq!(svot.to_string(g), expected);
}

#[test]
fn test_root_preamble_and_attribute_roundtrip() {
    let mut svot = Svot::new();
    let root = svot.new_root();
    svot.add_attributes(
        root,
        [("width", 800), ("height", 170), ("abc", 200), ("def", 400)],
    );
    let removed = svot.remove_attributes(root, ["abc", "def", "non-existent-attribute"]);
    assert_eq!(removed, 2);

    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- Licensed under the MIT License. -->
<svg xmlns="http://www.w3.org/2000/svg" width="800" height="170"></svg>"#;
    assert_eq!(svot.to_string(root), expected);
}

#[test]
fn test_document() {
    let mut svot = Svot::new();
    let root = svot.new_root();
    svot.add_attributes(root, [("width", 800), ("height", 170)]);

    let circle_name = svot.add_name("circle");
    let circle = svot.new_element(circle_name);
    svot.add_attribute_if_absent(circle, "r", 75);
    svot.add_attribute_if_absent(circle, "fill", "yellow");
    svot.add_attributes(circle, [("cx", 200), ("cy", 80)]);
    svot.append(root, circle).unwrap();

    let rect = svot.new_rect(0, 0, 200, 100, "blue");
    svot.append(root, rect).unwrap();

    let text = svot.new_text_element(50, 70, 70, "red", "hello");
    svot.append(root, text).unwrap();

    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- Licensed under the MIT License. -->
<svg xmlns="http://www.w3.org/2000/svg" width="800" height="170">
    <circle r="75" fill="yellow" cx="200" cy="80"></circle>
    <rect x="0" y="0" width="200" height="100" fill="blue"></rect>
    <text x="50" y="70" fontSize="70" fill="red">
        hello
    </text>
</svg>"#;
    assert_eq!(svot.to_string(root), expected);
}

#[test]
fn test_content_is_emitted_verbatim() {
    let mut svot = Svot::new();
    let text = svot.new_text_element(50, 70, 70, "red", "wat is a prototype? \u{1f62c}");
    let expected = "<text x=\"50\" y=\"70\" fontSize=\"70\" fill=\"red\">\n    wat is a prototype? \u{1f62c}\n</text>";
    assert_eq!(svot.to_string(text), expected);
}

#[test]
fn test_serialize_does_not_mutate() {
    let mut svot = Svot::new();
    let root = svot.new_root();
    let rect = svot.new_rect(0, 0, 10, 10, "blue");
    svot.append(root, rect).unwrap();
    let first = svot.to_string(root);
    let second = svot.to_string(root);
    assert_eq!(first, second);
}

#[test]
fn test_write_rejects_non_root() {
    let mut svot = Svot::new();
    let name = svot.add_name("g");
    let g = svot.new_element(name);
    let err = svot.write(g, "unused.svg").unwrap_err();
    assert!(matches!(err, Error::NotRoot(_)));
}

#[test]
fn test_write_to_file() {
    let mut svot = Svot::new();
    let root = svot.new_root();
    let rect = svot.new_rect(0, 0, 10, 10, "blue");
    svot.append(root, rect).unwrap();

    let path = std::env::temp_dir().join("svot_test_write_to_file.svg");
    svot.write(root, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, svot.to_string(root));
}
