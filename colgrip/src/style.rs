use crate::engine::DragState;
use crate::store::ColumnWidths;

/// Attribute shared by every cell of a column; its value is the column id.
pub const COLUMN_ATTR: &str = "data-column-id";
/// Attribute on the header's resize handle; its value is the column id.
pub const HANDLE_ATTR: &str = "data-resize-handle";

/// Cursor shown document-wide while a drag is live.
pub const RESIZE_CURSOR: &str = "col-resize";

/// Project the width overrides and the live session into CSS text.
///
/// Pure function; the engine writes the result into its style element once
/// per store change and once per session boundary, never per raw mousemove.
/// Override rules carry `!important` so they beat the table's own per-column
/// CSS on specificity.
pub fn project(widths: &ColumnWidths, drag: Option<&DragState>) -> String {
    let mut css = String::new();

    for (column, width) in widths.iter() {
        let px = format_px(width);
        css.push_str(&format!(
            "[{COLUMN_ATTR}=\"{column}\"] {{ width: {px} !important; max-width: {px} !important; }}\n"
        ));
    }

    if let Some(drag) = drag {
        css.push_str(&format!("* {{ cursor: {RESIZE_CURSOR} !important; }}\n"));
        css.push_str(&format!(
            "[{HANDLE_ATTR}=\"{}\"] {{ opacity: 1 !important; transition: none !important; }}\n",
            drag.column
        ));
    }

    css
}

/// Whole-pixel values print as integers, fractional values keep their digits.
fn format_px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}
