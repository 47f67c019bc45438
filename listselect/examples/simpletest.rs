//! Scripted walk over a four-item list: center it on a mock display, move
//! the selection down and back up, then jump straight to the last row.

use std::fs::File;

use listselect::{LabelOptions, ListSelect, MonoFont, MonoLabel, TextLabel, VisualNode};
use simplelog::{Config, LevelFilter, WriteLogger};

const DISPLAY_WIDTH: i32 = 320;
const DISPLAY_HEIGHT: i32 = 240;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("simpletest.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // 6x12 pixel glyphs, doubled by the scale option
    let font = MonoFont::new(6, 12);
    let mut list_select: ListSelect<MonoLabel> = ListSelect::builder(font)
        .items(["First", "Second", "Third", "Fourth"])
        .label_options(LabelOptions::new().scale(2))
        .build();

    list_select.set_anchor_point((0.5, 0.5));
    list_select.set_anchored_position((DISPLAY_WIDTH / 2, DISPLAY_HEIGHT / 2));

    println!("anchor point      {:?}", list_select.anchor_point());
    println!("anchored position {:?}", list_select.anchored_position());
    println!("bounding box      {:?}", list_select.bounding_box());
    println!();

    for _ in 0..3 {
        list_select.move_selection_down();
        show(&list_select);
    }

    for _ in 0..3 {
        list_select.move_selection_up();
        show(&list_select);
    }

    list_select.set_selected_index(3);
    show(&list_select);

    Ok(())
}

/// Print the rendered rows plus the item under the cursor.
fn show(list_select: &ListSelect<MonoLabel>) {
    println!("{}", list_select.label().text());
    match list_select.selected_item() {
        Ok(item) => println!("-> selected: {item}"),
        Err(err) => println!("-> {err}"),
    }
    println!();
}
