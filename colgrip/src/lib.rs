pub mod engine;
pub mod error;
pub mod limits;
pub mod store;
pub mod style;

pub use engine::{DragState, ResizeEngine};
pub use error::EngineError;
pub use limits::ColumnLimits;
pub use store::{Action, ColumnWidths, WidthStore};
pub use style::{project, COLUMN_ATTR, HANDLE_ATTR};
