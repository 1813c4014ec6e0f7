//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

use crate::grid::GridDimensions;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Controls bar area, when shown.
    pub controls_area: Option<Rect>,
    /// Error banner area, when there is an error.
    pub banner_area: Option<Rect>,
    /// Card grid area.
    pub grid_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, show_controls: bool, show_banner: bool) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                        // Status bar
                Constraint::Length(u16::from(show_controls)), // Controls bar
                Constraint::Length(u16::from(show_banner)),   // Error banner
                Constraint::Min(0),                           // Card grid
            ])
            .split(area);

        Self {
            status_area: chunks[0],
            controls_area: show_controls.then_some(chunks[1]),
            banner_area: show_banner.then_some(chunks[2]),
            grid_area: chunks[3],
        }
    }
}

/// Split `area` into card slots, row-major, and return the first `count`.
pub fn card_areas(area: Rect, dims: GridDimensions, count: usize) -> Vec<Rect> {
    let rows = dims.rows.max(1) as u32;
    let columns = dims.columns.max(1) as u32;

    let row_areas =
        RatatuiLayout::vertical((0..rows).map(|_| Constraint::Ratio(1, rows))).split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            RatatuiLayout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns)))
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// Convert a terminal area to approximate pixels.
pub fn area_in_pixels(area: Rect, cell_width_px: u16, cell_height_px: u16) -> (f64, f64) {
    (
        f64::from(area.width) * f64::from(cell_width_px),
        f64::from(area.height) * f64::from(cell_height_px),
    )
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
