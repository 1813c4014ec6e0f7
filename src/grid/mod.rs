//! Adaptive grid layout.
//!
//! Picks a column/row count for a number of cards and a container size,
//! balancing readability (not too many columns) against fit (cards not too
//! short). Everything here is pure; [`GridTracker`] adds change detection so
//! callers can feed it every resize and data update.

/// Minimum usable card width in pixels.
pub const MIN_CARD_WIDTH_PX: f64 = 260.0;
/// Minimum usable card height in pixels.
pub const MIN_CARD_HEIGHT_PX: f64 = 180.0;

/// Column and row count of the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: usize,
    pub rows: usize,
}

impl GridDimensions {
    /// Number of card slots.
    pub fn cells(&self) -> usize {
        self.columns * self.rows
    }
}

/// Preferred column count for `n` items, ignoring the viewport.
///
/// Up to 15 items scale as `ceil(n / 3)` within `[1, 5]`; then 4 columns up to
/// 20, 5 up to 30 and 6 beyond.
pub fn preferred_columns(n: usize) -> usize {
    match n {
        0 => 1,
        1..=15 => n.div_ceil(3).clamp(1, 5),
        16..=20 => 4,
        21..=30 => 5,
        _ => 6,
    }
}

/// Minimum card sizes driving the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPolicy {
    pub min_card_width: f64,
    pub min_card_height: f64,
}

impl Default for GridPolicy {
    fn default() -> Self {
        Self {
            min_card_width: MIN_CARD_WIDTH_PX,
            min_card_height: MIN_CARD_HEIGHT_PX,
        }
    }
}

impl GridPolicy {
    /// Compute the grid for `item_count` cards in a `width` × `height` container.
    ///
    /// A height of zero or less means unknown and skips the height check.
    pub fn compute(&self, item_count: usize, width: f64, height: f64) -> GridDimensions {
        let n = item_count.max(1);

        // `as usize` saturates negatives and NaN to 0
        let by_width = (width / self.min_card_width).floor() as usize;
        let max_columns = by_width.min(n).max(1);

        let mut columns = preferred_columns(n).min(max_columns).max(1);
        let mut rows = n.div_ceil(columns);

        if height > 0.0 {
            while columns < max_columns && height / (rows as f64) < self.min_card_height {
                columns += 1;
                rows = n.div_ceil(columns);
            }
        }

        GridDimensions { columns, rows }
    }
}

/// Compute the grid with the default card sizes.
pub fn compute_grid(item_count: usize, width: f64, height: f64) -> GridDimensions {
    GridPolicy::default().compute(item_count, width, height)
}

/// Recomputes the grid only when its inputs change.
#[derive(Debug, Clone)]
pub struct GridTracker {
    policy: GridPolicy,
    observed: Option<(usize, f64, f64)>,
    dims: GridDimensions,
}

impl GridTracker {
    pub fn new(policy: GridPolicy) -> Self {
        Self {
            policy,
            observed: None,
            dims: GridDimensions {
                columns: 1,
                rows: 1,
            },
        }
    }

    /// Feed the current item count and container size.
    pub fn observe(&mut self, item_count: usize, width: f64, height: f64) -> GridDimensions {
        let input = (item_count, width, height);
        if self.observed != Some(input) {
            self.dims = self.policy.compute(item_count, width, height);
            self.observed = Some(input);
            tracing::debug!(
                item_count,
                width,
                height,
                columns = self.dims.columns,
                rows = self.dims.rows,
                "grid recomputed"
            );
        }
        self.dims
    }

    /// The last computed dimensions.
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }
}

impl Default for GridTracker {
    fn default() -> Self {
        Self::new(GridPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_columns_bands() {
        assert_eq!(preferred_columns(0), 1);
        assert_eq!(preferred_columns(1), 1);
        assert_eq!(preferred_columns(3), 1);
        assert_eq!(preferred_columns(4), 2);
        assert_eq!(preferred_columns(12), 4);
        assert_eq!(preferred_columns(15), 5);
        assert_eq!(preferred_columns(16), 4);
        assert_eq!(preferred_columns(20), 4);
        assert_eq!(preferred_columns(21), 5);
        assert_eq!(preferred_columns(30), 5);
        assert_eq!(preferred_columns(31), 6);
        assert_eq!(preferred_columns(500), 6);
    }

    #[test]
    fn test_grid_covers_all_items() {
        let sizes = [
            (0.0, 0.0),
            (300.0, 200.0),
            (500.0, 900.0),
            (1280.0, 720.0),
            (1920.0, 300.0),
            (4000.0, 2000.0),
        ];
        for n in 0..=60 {
            for &(w, h) in &sizes {
                let grid = compute_grid(n, w, h);
                let effective = n.max(1);
                assert!(grid.columns >= 1);
                assert!(grid.cells() >= effective, "n={n} w={w} h={h}: {grid:?}");
                assert_eq!(grid.rows, effective.div_ceil(grid.columns));
            }
        }
    }

    #[test]
    fn test_empty_reserves_one_cell() {
        assert_eq!(
            compute_grid(0, 1920.0, 1080.0),
            GridDimensions {
                columns: 1,
                rows: 1
            }
        );
    }

    #[test]
    fn test_width_bound() {
        for h in [0.0, 100.0, 1000.0, 5000.0] {
            assert_eq!(compute_grid(12, 500.0, h).columns, 1);
        }
        // 1040 / 260 = 4
        assert!(compute_grid(31, 1040.0, 100.0).columns <= 4);
    }

    #[test]
    fn test_degenerate_width() {
        assert_eq!(compute_grid(5, -10.0, 500.0).columns, 1);
        assert_eq!(compute_grid(5, f64::NAN, 500.0).columns, 1);
    }

    #[test]
    fn test_preferred_when_height_fits() {
        // 12 items -> 4 preferred columns, 3 rows of 300px each
        let grid = compute_grid(12, 1920.0, 900.0);
        assert_eq!(grid, GridDimensions { columns: 4, rows: 3 });
    }

    #[test]
    fn test_height_growth_until_fit() {
        // 12 items, 4 cols -> 3 rows; 400 / 3 < 180, 6 cols -> 2 rows of 200
        let grid = compute_grid(12, 1920.0, 400.0);
        assert_eq!(grid, GridDimensions { columns: 6, rows: 2 });
        assert!(400.0 / grid.rows as f64 >= MIN_CARD_HEIGHT_PX);
    }

    #[test]
    fn test_height_growth_stops_at_width_bound() {
        // width allows 5 columns; even one row would be too short
        let grid = compute_grid(12, 1300.0, 100.0);
        assert_eq!(grid.columns, 5);
        assert_eq!(grid.rows, 3);
    }

    #[test]
    fn test_unknown_height_keeps_preferred() {
        let grid = compute_grid(12, 1920.0, 0.0);
        assert_eq!(grid, GridDimensions { columns: 4, rows: 3 });
    }

    #[test]
    fn test_never_more_columns_than_items() {
        let grid = compute_grid(2, 4000.0, 50.0);
        assert_eq!(grid, GridDimensions { columns: 2, rows: 1 });
    }

    #[test]
    fn test_custom_policy() {
        let policy = GridPolicy {
            min_card_width: 100.0,
            min_card_height: 50.0,
        };
        let grid = policy.compute(9, 1000.0, 100.0);
        // preferred 3 -> 3 rows of 33px; grows to 5 cols -> 2 rows of 50px
        assert_eq!(grid, GridDimensions { columns: 5, rows: 2 });
    }

    #[test]
    fn test_tracker_recomputes_on_change() {
        let mut tracker = GridTracker::default();
        assert_eq!(tracker.dimensions(), GridDimensions { columns: 1, rows: 1 });

        let first = tracker.observe(12, 1920.0, 900.0);
        assert_eq!(first, GridDimensions { columns: 4, rows: 3 });

        // resize
        let resized = tracker.observe(12, 500.0, 900.0);
        assert_eq!(resized.columns, 1);

        // item count change
        let fewer = tracker.observe(3, 1920.0, 900.0);
        assert_eq!(fewer, GridDimensions { columns: 1, rows: 3 });
        assert_eq!(tracker.dimensions(), fewer);
    }
}
