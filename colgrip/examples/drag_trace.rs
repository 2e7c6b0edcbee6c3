use std::fs::File;

use colgrip::{ColumnLimits, ResizeEngine, COLUMN_ATTR, HANDLE_ATTR};
use griddom::{Document, Element, Event, EventType, PointerEvent};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("drag_trace.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let document = Document::new();
    let header = header_row(&[("name", 200.0), ("created_at", 160.0), ("status", 120.0)]);

    let limits = ColumnLimits::new().min_override("created_at", 144.0);
    let mut engine = ResizeEngine::with_limits(limits);
    engine.mount(&document).expect("fresh engine mounts");

    println!("== mounted (empty projection) ==");
    print_styles(&document);

    // Grab the "name" handle at x=500 and drag left in a few steps.
    let handle = header
        .find_by_data(HANDLE_ATTR, "name")
        .expect("header has a name handle");
    document.dispatch(&Event::Pointer(
        PointerEvent::new(EventType::MouseDown).page_x(500.0).target(&handle),
    ));
    println!("== drag started on \"name\" (cursor: {:?}) ==", document.body_cursor());
    print_styles(&document);

    for page_x in [480.0, 480.0, 450.0, 0.0, -200.0] {
        document.dispatch(&Event::Pointer(
            PointerEvent::new(EventType::MouseMove).page_x(page_x),
        ));
        println!(
            "== moved to x={page_x} (committed: {:?}) ==",
            engine.width_of("name")
        );
        print_styles(&document);
    }

    document.dispatch(&Event::Pointer(PointerEvent::new(EventType::MouseUp)));
    println!("== drag ended (cursor: {:?}) ==", document.body_cursor());
    print_styles(&document);

    engine.reset_column("name");
    println!("== \"name\" reset to its default width ==");
    print_styles(&document);

    engine.unmount().expect("mounted engine unmounts");
    println!("== unmounted ==");
    Ok(())
}

fn header_row(columns: &[(&str, f32)]) -> Element {
    Element::new().id("header").children(columns.iter().map(|(column, width)| {
        Element::new()
            .id(format!("header-{column}"))
            .data(COLUMN_ATTR, *column)
            .measured(*width)
            .child(
                Element::new()
                    .id(format!("handle-{column}"))
                    .data(HANDLE_ATTR, *column),
            )
    }))
}

fn print_styles(document: &Document) {
    let text = document.style_text();
    if text.is_empty() {
        println!("(no rules)\n");
    } else {
        println!("{text}");
    }
}
