use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column-identifier → override width in pixels.
///
/// Partial: absent entries mean "use the CSS-authored default/intrinsic
/// width". Ordered so projected CSS is stable across runs. Mutable only
/// through the store's reducer; hosts get read access and snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnWidths(BTreeMap<String, f32>);

impl ColumnWidths {
    pub fn get(&self, column: &str) -> Option<f32> {
        self.0.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.0.iter().map(|(column, width)| (column.as_str(), *width))
    }

    fn insert(&mut self, column: String, width: f32) {
        self.0.insert(column, width);
    }

    fn remove(&mut self, column: &str) -> Option<f32> {
        self.0.remove(column)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Reducer input. Transient, consumed once by `WidthStore::dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set a column's override width. Callers clamp and de-duplicate first.
    Resize { column: String, width: f32 },
    /// Drop a single column's override.
    Reset { column: String },
    /// Drop every override.
    Clear,
}

/// The authoritative width mapping plus a dirty flag.
///
/// The flag gates re-projection: an action that changes nothing leaves it
/// untouched, so no spurious style rewrite happens downstream.
#[derive(Debug, Default)]
pub struct WidthStore {
    widths: ColumnWidths,
    dirty: bool,
}

impl WidthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// The single mutation path for column widths.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Resize { column, width } => {
                log::trace!("[store] resize {column} -> {width}px");
                self.widths.insert(column, width);
                self.dirty = true;
            }
            Action::Reset { column } => {
                if self.widths.remove(&column).is_some() {
                    log::trace!("[store] reset {column}");
                    self.dirty = true;
                }
            }
            Action::Clear => {
                if !self.widths.is_empty() {
                    log::trace!("[store] clear all overrides");
                    self.widths.clear();
                    self.dirty = true;
                }
            }
        }
    }

    /// Return whether the widths changed since the last call, clearing the
    /// flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_inserts_and_marks_dirty() {
        let mut store = WidthStore::new();
        store.dispatch(Action::Resize {
            column: "name".into(),
            width: 150.0,
        });
        assert_eq!(store.widths().get("name"), Some(150.0));
        assert!(store.take_dirty());
        assert!(!store.take_dirty());
    }

    #[test]
    fn test_resize_overwrites() {
        let mut store = WidthStore::new();
        store.dispatch(Action::Resize {
            column: "name".into(),
            width: 150.0,
        });
        store.dispatch(Action::Resize {
            column: "name".into(),
            width: 300.0,
        });
        assert_eq!(store.widths().get("name"), Some(300.0));
        assert_eq!(store.widths().len(), 1);
    }

    #[test]
    fn test_reset_absent_column_is_noop() {
        let mut store = WidthStore::new();
        store.dispatch(Action::Resize {
            column: "name".into(),
            width: 150.0,
        });
        let _ = store.take_dirty();

        store.dispatch(Action::Reset {
            column: "status".into(),
        });
        assert_eq!(store.widths().get("name"), Some(150.0));
        assert!(!store.take_dirty());
    }

    #[test]
    fn test_reset_present_column() {
        let mut store = WidthStore::new();
        store.dispatch(Action::Resize {
            column: "name".into(),
            width: 150.0,
        });
        let _ = store.take_dirty();

        store.dispatch(Action::Reset {
            column: "name".into(),
        });
        assert!(store.widths().is_empty());
        assert!(store.take_dirty());
    }

    #[test]
    fn test_clear_on_empty_is_noop() {
        let mut store = WidthStore::new();
        store.dispatch(Action::Clear);
        assert!(!store.take_dirty());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut store = WidthStore::new();
        store.dispatch(Action::Resize {
            column: "name".into(),
            width: 150.0,
        });
        store.dispatch(Action::Resize {
            column: "status".into(),
            width: 120.0,
        });
        let _ = store.take_dirty();

        store.dispatch(Action::Clear);
        assert!(store.widths().is_empty());
        assert!(store.take_dirty());
    }

    #[test]
    fn test_iteration_order_is_sorted() {
        let mut store = WidthStore::new();
        for (column, width) in [("zeta", 200.0), ("alpha", 150.0), ("mid", 175.0)] {
            store.dispatch(Action::Resize {
                column: column.into(),
                width,
            });
        }
        let columns: Vec<&str> = store.widths().iter().map(|(column, _)| column).collect();
        assert_eq!(columns, vec!["alpha", "mid", "zeta"]);
    }
}
