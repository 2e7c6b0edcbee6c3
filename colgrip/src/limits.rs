use std::collections::HashMap;

/// Default minimum column width in pixels.
pub const DEFAULT_MIN_WIDTH: f32 = 108.0;
/// Default maximum column width in pixels.
pub const DEFAULT_MAX_WIDTH: f32 = 800.0;

/// Per-column width bounds.
///
/// Every column gets the default bounds unless a named override exists.
/// Date-like columns are the usual minimum override (~144 px); the maximum
/// override mechanism is carried even though stock tables leave it uniform.
#[derive(Debug, Clone)]
pub struct ColumnLimits {
    default_min: f32,
    default_max: f32,
    min_overrides: HashMap<String, f32>,
    max_overrides: HashMap<String, f32>,
}

impl Default for ColumnLimits {
    fn default() -> Self {
        Self {
            default_min: DEFAULT_MIN_WIDTH,
            default_max: DEFAULT_MAX_WIDTH,
            min_overrides: HashMap::new(),
            max_overrides: HashMap::new(),
        }
    }
}

impl ColumnLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_min(mut self, px: f32) -> Self {
        self.default_min = px;
        self
    }

    pub fn default_max(mut self, px: f32) -> Self {
        self.default_max = px;
        self
    }

    pub fn min_override(mut self, column: impl Into<String>, px: f32) -> Self {
        self.min_overrides.insert(column.into(), px);
        self
    }

    pub fn max_override(mut self, column: impl Into<String>, px: f32) -> Self {
        self.max_overrides.insert(column.into(), px);
        self
    }

    pub fn min_width(&self, column: &str) -> f32 {
        self.min_overrides
            .get(column)
            .copied()
            .unwrap_or(self.default_min)
    }

    pub fn max_width(&self, column: &str) -> f32 {
        self.max_overrides
            .get(column)
            .copied()
            .unwrap_or(self.default_max)
    }

    /// Constrain `proposed` to the column's `[min, max]` interval.
    ///
    /// Pure and total; negative proposals (fast leftward drag past the
    /// handle's origin) clamp to the minimum. The maximum is applied first,
    /// so a degenerate min > max configuration resolves to min.
    pub fn clamp(&self, column: &str, proposed: f32) -> f32 {
        proposed.min(self.max_width(column)).max(self.min_width(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = ColumnLimits::new();
        assert_eq!(limits.min_width("anything"), DEFAULT_MIN_WIDTH);
        assert_eq!(limits.max_width("anything"), DEFAULT_MAX_WIDTH);
    }

    #[test]
    fn test_overrides() {
        let limits = ColumnLimits::new()
            .min_override("created_at", 144.0)
            .max_override("icon", 200.0);
        assert_eq!(limits.min_width("created_at"), 144.0);
        assert_eq!(limits.min_width("name"), DEFAULT_MIN_WIDTH);
        assert_eq!(limits.max_width("icon"), 200.0);
        assert_eq!(limits.max_width("name"), DEFAULT_MAX_WIDTH);
    }

    #[test]
    fn test_clamp_within_bounds() {
        let limits = ColumnLimits::new();
        assert_eq!(limits.clamp("name", 300.0), 300.0);
    }

    #[test]
    fn test_clamp_floor_and_ceiling() {
        let limits = ColumnLimits::new();
        assert_eq!(limits.clamp("name", 10.0), DEFAULT_MIN_WIDTH);
        assert_eq!(limits.clamp("name", 5000.0), DEFAULT_MAX_WIDTH);
    }

    #[test]
    fn test_clamp_negative_proposal() {
        let limits = ColumnLimits::new();
        assert_eq!(limits.clamp("name", -320.0), DEFAULT_MIN_WIDTH);
    }

    #[test]
    fn test_clamp_idempotent() {
        let limits = ColumnLimits::new().min_override("created_at", 144.0);
        for column in ["name", "created_at"] {
            for proposed in [-50.0, 0.0, 108.0, 144.0, 450.5, 800.0, 2000.0] {
                let once = limits.clamp(column, proposed);
                assert_eq!(limits.clamp(column, once), once);
            }
        }
    }

    #[test]
    fn test_clamp_bounds_property() {
        let limits = ColumnLimits::new()
            .min_override("created_at", 144.0)
            .max_override("icon", 200.0);
        for column in ["name", "created_at", "icon"] {
            for proposed in [-1000.0, -1.0, 0.0, 107.9, 108.0, 500.0, 800.1, 9999.0] {
                let clamped = limits.clamp(column, proposed);
                assert!(clamped >= limits.min_width(column));
                assert!(clamped <= limits.max_width(column));
            }
        }
    }

    #[test]
    fn test_clamp_degenerate_config_resolves_to_min() {
        let limits = ColumnLimits::new().min_override("odd", 900.0);
        assert_eq!(limits.clamp("odd", 500.0), 900.0);
    }
}
