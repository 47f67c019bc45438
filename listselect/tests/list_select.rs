use listselect::{
    BoundingBox, Error, Group, LabelOptions, ListSelect, MonoFont, MonoLabel, Rgb, TextLabel,
    VisualNode,
};

fn four_items() -> ListSelect<MonoLabel> {
    ListSelect::new(MonoFont::CELL, ["First", "Second", "Third", "Fourth"])
}

#[test]
fn test_initial_render() {
    let list = four_items();
    assert_eq!(list.label().text(), ">First\n Second\n Third\n Fourth");
}

#[test]
fn test_defaults() {
    let list = four_items();
    assert_eq!(list.selected_index(), 0);
    assert_eq!(list.cursor_char(), ">");
    assert_eq!(list.selected_item(), Ok("First"));
    assert_eq!(list.len(), 4);
    assert!(!list.is_empty());
    assert_eq!(list.position(), (0, 0));
    assert_eq!(list.anchor_point(), (0.0, 0.0));
    assert_eq!(list.anchored_position(), (0, 0));
}

#[test]
fn test_move_selection_walk() {
    let mut list = four_items();

    list.move_selection_down();
    assert_eq!(list.selected_index(), 1);
    assert_eq!(list.label().text(), " First\n>Second\n Third\n Fourth");
    assert_eq!(list.selected_item(), Ok("Second"));

    list.move_selection_down();
    list.move_selection_down();
    assert_eq!(list.selected_index(), 3);
    assert_eq!(list.label().text(), " First\n Second\n Third\n>Fourth");

    // A fourth move in either direction is a no-op at the boundary
    list.move_selection_down();
    assert_eq!(list.selected_index(), 3);

    list.move_selection_up();
    list.move_selection_up();
    list.move_selection_up();
    assert_eq!(list.selected_index(), 0);
    assert_eq!(list.label().text(), ">First\n Second\n Third\n Fourth");

    list.move_selection_up();
    assert_eq!(list.selected_index(), 0);
}

#[test]
fn test_move_selection_stops_at_last_row() {
    let mut list = four_items();
    list.set_selected_index(3);

    list.move_selection_down();
    list.move_selection_down();
    assert_eq!(list.selected_index(), 3);
    assert_eq!(list.label().text(), " First\n Second\n Third\n>Fourth");
}

#[test]
fn test_move_selection_stops_at_first_row() {
    let mut list = four_items();

    list.move_selection_up();
    list.move_selection_up();
    assert_eq!(list.selected_index(), 0);
    assert_eq!(list.label().text(), ">First\n Second\n Third\n Fourth");
}

#[test]
fn test_set_selected_index_is_unchecked() {
    let mut list = four_items();

    list.set_selected_index(9);
    assert_eq!(list.selected_index(), 9);
    // No row is marked while the index is out of range
    assert_eq!(list.label().text(), " First\n Second\n Third\n Fourth");
    assert_eq!(
        list.selected_item(),
        Err(Error::OutOfRange { index: 9, len: 4 })
    );
    assert!(list.selected_item().unwrap_err().is_out_of_range());

    // Moves still apply their plain conditions to the stored value
    list.move_selection_down();
    assert_eq!(list.selected_index(), 9);
    list.move_selection_up();
    assert_eq!(list.selected_index(), 8);

    list.set_selected_index(2);
    assert_eq!(list.label().text(), " First\n Second\n>Third\n Fourth");
    assert_eq!(list.selected_item(), Ok("Third"));
}

#[test]
fn test_move_selection_down_at_max_index() {
    let mut list = four_items();
    list.set_selected_index(usize::MAX);

    // The increment must not wrap the selection back to row 0
    list.move_selection_down();
    assert_eq!(list.selected_index(), usize::MAX);
    assert_eq!(list.label().text(), " First\n Second\n Third\n Fourth");
    assert_eq!(
        list.selected_item(),
        Err(Error::OutOfRange {
            index: usize::MAX,
            len: 4
        })
    );

    list.move_selection_up();
    assert_eq!(list.selected_index(), usize::MAX - 1);
}

#[test]
fn test_try_set_selected_index_validates() {
    let mut list = four_items();

    assert_eq!(list.try_set_selected_index(3), Ok(()));
    assert_eq!(list.selected_index(), 3);
    assert_eq!(list.selected_item(), Ok("Fourth"));

    // Rejected without touching the widget
    assert_eq!(
        list.try_set_selected_index(4),
        Err(Error::OutOfRange { index: 4, len: 4 })
    );
    assert_eq!(list.selected_index(), 3);
    assert_eq!(list.label().text(), " First\n Second\n Third\n>Fourth");
}

#[test]
fn test_empty_list() {
    let mut list: ListSelect<MonoLabel> = ListSelect::new(MonoFont::CELL, Vec::<String>::new());

    assert!(list.is_empty());
    assert_eq!(list.label().text(), "");
    assert_eq!(
        list.selected_item(),
        Err(Error::OutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        list.try_set_selected_index(0),
        Err(Error::OutOfRange { index: 0, len: 0 })
    );
    assert!(list.bounding_box().is_empty());
    assert_eq!(list.width(), 0);
    assert_eq!(list.height(), 0);
}

#[test]
fn test_set_items_keeps_selected_index() {
    let mut list = four_items();
    list.set_selected_index(2);

    // Shrinking the list can strand the index out of range
    list.set_items(["Alpha", "Beta"]);
    assert_eq!(list.selected_index(), 2);
    assert_eq!(list.label().text(), " Alpha\n Beta");
    assert_eq!(
        list.selected_item(),
        Err(Error::OutOfRange { index: 2, len: 2 })
    );

    assert_eq!(list.try_set_selected_index(0), Ok(()));
    assert_eq!(list.label().text(), ">Alpha\n Beta");
}

#[test]
fn test_set_cursor_char() {
    let mut list = four_items();

    list.set_cursor_char("->");
    assert_eq!(list.label().text(), "->First\n Second\n Third\n Fourth");

    // Unselected rows keep the single-space prefix regardless of marker width
    list.move_selection_down();
    assert_eq!(list.label().text(), " First\n->Second\n Third\n Fourth");

    list.set_cursor_char("*");
    assert_eq!(list.label().text(), " First\n*Second\n Third\n Fourth");
}

#[test]
fn test_resize_is_unsupported() {
    let mut list = four_items();

    let err = list.resize(100, 50).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err, Error::Unsupported("resize"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::Unsupported("resize").to_string(),
        "unsupported operation `resize`: the text label dictates widget geometry"
    );
    assert_eq!(
        Error::OutOfRange { index: 9, len: 4 }.to_string(),
        "selected index 9 is out of range for 4 item(s)"
    );
}

#[test]
fn test_geometry_follows_label() {
    let mut list = four_items();

    // Widest row is ">Second" = 7 cells, 4 rows of 1-cell glyphs
    assert_eq!(list.width(), 7);
    assert_eq!(list.height(), 4);

    // The box sits at the local origin
    let bounds = list.bounding_box();
    assert_eq!(bounds, BoundingBox::new(0, 0, 7, 4));
    assert_eq!(bounds, list.label().bounding_box());
    assert_eq!(bounds.size(), (7, 4));
    assert_eq!(bounds.right(), 7);
    assert_eq!(bounds.bottom(), 4);

    list.set_anchor_point((0.5, 0.5));
    list.set_anchored_position((160, 120));
    assert_eq!(list.anchor_point(), (0.5, 0.5));
    assert_eq!(list.anchored_position(), (160, 120));
    // Centered: 160 - round(7 / 2), 120 - 4 / 2
    assert_eq!(list.label().origin(), (156, 118));
}

#[test]
fn test_scale_multiplies_geometry() {
    // 6x12 pixel glyphs at scale 2, as a pixel display would use
    let list: ListSelect<MonoLabel> = ListSelect::builder(MonoFont::new(6, 12))
        .items(["First", "Second", "Third", "Fourth"])
        .label_options(LabelOptions::new().scale(2))
        .build();

    assert_eq!(list.width(), 7 * 6 * 2);
    assert_eq!(list.height(), 4 * 12 * 2);
}

#[test]
fn test_group_surface() {
    let mut list = four_items();

    assert_eq!(list.child_count(), 1);
    list.set_position(10, 20);
    assert_eq!(list.position(), (10, 20));

    let mut boxes = Vec::new();
    list.for_each_child(&mut |child| boxes.push(child.bounding_box()));
    assert_eq!(boxes, vec![list.label().bounding_box()]);
}

#[test]
fn test_builder_styling() {
    let list: ListSelect<MonoLabel> = ListSelect::builder(MonoFont::CELL)
        .items(["First", "Second", "Third", "Fourth"])
        .position(5, 6)
        .color(Rgb::from(0x00ff00))
        .background_color(Rgb::from_hex(0x202020))
        .selected_index(2)
        .cursor_char("*")
        .build();

    assert_eq!(list.position(), (5, 6));
    assert_eq!(list.label().color(), Rgb::new(0x00, 0xff, 0x00));
    assert_eq!(list.label().color().to_hex(), 0x00ff00);
    assert_eq!(list.label().background_color(), Rgb::new(0x20, 0x20, 0x20));
    assert_eq!(list.label().text(), " First\n Second\n*Third\n Fourth");
    assert_eq!(list.selected_item(), Ok("Third"));
}

#[test]
fn test_builder_accepts_out_of_range_index() {
    let list: ListSelect<MonoLabel> = ListSelect::builder(MonoFont::CELL)
        .items(["a", "b"])
        .selected_index(10)
        .build();

    assert_eq!(list.selected_index(), 10);
    assert_eq!(list.label().text(), " a\n b");
    assert_eq!(
        list.selected_item(),
        Err(Error::OutOfRange { index: 10, len: 2 })
    );
}
