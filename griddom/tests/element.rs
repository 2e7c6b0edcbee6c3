use griddom::Element;

// ============================================================================
// Attributes and measurement
// ============================================================================

#[test]
fn test_data_attributes() {
    let el = Element::new().data("data-column-id", "name");
    assert_eq!(el.get_data("data-column-id").as_deref(), Some("name"));
    assert_eq!(el.get_data("data-missing"), None);
}

#[test]
fn test_offset_width_defaults_to_unmeasured() {
    let el = Element::new();
    assert_eq!(el.offset_width(), None);

    el.set_offset_width(Some(200.0));
    assert_eq!(el.offset_width(), Some(200.0));

    el.set_offset_width(None);
    assert_eq!(el.offset_width(), None);
}

#[test]
fn test_measured_builder() {
    let el = Element::new().measured(144.5);
    assert_eq!(el.offset_width(), Some(144.5));
}

#[test]
fn test_id_builder() {
    let el = Element::new().id("header-name");
    assert_eq!(el.get_id(), "header-name");
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::new();
    let b = Element::new();
    assert_ne!(a.get_id(), b.get_id());
}

// ============================================================================
// Tree structure
// ============================================================================

#[test]
fn test_child_sets_parent_link() {
    let child = Element::new().id("handle");
    let parent = Element::new().id("cell").child(child.clone());

    let linked = child.parent().unwrap();
    assert!(linked.same_node(&parent));
    assert_eq!(parent.child_count(), 1);
}

#[test]
fn test_root_has_no_parent() {
    let el = Element::new();
    assert!(el.parent().is_none());
}

#[test]
fn test_parent_link_is_weak() {
    let child = Element::new();
    {
        let _parent = Element::new().child(child.clone());
    }
    assert!(child.parent().is_none());
}

#[test]
fn test_descendants_depth_first() {
    let root = Element::new()
        .id("root")
        .child(
            Element::new()
                .id("a")
                .child(Element::new().id("a1"))
                .child(Element::new().id("a2")),
        )
        .child(Element::new().id("b"));

    let ids: Vec<String> = root.descendants().iter().map(Element::get_id).collect();
    assert_eq!(ids, vec!["a", "a1", "a2", "b"]);
}

#[test]
fn test_find_by_data() {
    let root = Element::new()
        .child(Element::new().data("data-column-id", "name").id("cell-name"))
        .child(
            Element::new()
                .data("data-column-id", "status")
                .child(Element::new().data("data-resize-handle", "status").id("h")),
        );

    let cell = root.find_by_data("data-column-id", "name").unwrap();
    assert_eq!(cell.get_id(), "cell-name");

    let handle = root.find_by_data("data-resize-handle", "status").unwrap();
    assert_eq!(handle.get_id(), "h");

    assert!(root.find_by_data("data-resize-handle", "name").is_none());
}

#[test]
fn test_find_by_data_matches_self() {
    let el = Element::new().data("data-column-id", "name");
    assert!(el.find_by_data("data-column-id", "name").is_some());
}
