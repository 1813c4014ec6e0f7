//! UI rendering using ratatui.
//!
//! The screen is a status bar, an optional controls bar, an error banner
//! while the visible market has an error, and the grid of coin cards. The
//! grid shape comes from the [`GridTracker`], fed with the grid area
//! converted to pixels.

mod layout;
mod theme;
mod widgets;

pub use layout::{Layout, area_in_pixels, card_areas, centered_rect};
pub use theme::Palette;
pub use widgets::{CandleChart, CoinCard, ControlsBar, HelpPanel, StatusBar};

use ratatui::Frame;

use crate::config::{KeyBindings, ThemeConfig, UiConfig};
use crate::grid::{GridDimensions, GridTracker};
use crate::state::{MarketCache, Store};

/// Main UI renderer.
pub struct Ui {
    palette: Palette,
    cell_width_px: u16,
    cell_height_px: u16,
    show_controls_bar: bool,
    keybindings: KeyBindings,
    grid: GridTracker,
}

impl Ui {
    pub fn new(ui: &UiConfig, theme: &ThemeConfig, keybindings: &KeyBindings) -> Self {
        Self {
            palette: Palette::from(theme),
            cell_width_px: ui.cell_width_px.max(1),
            cell_height_px: ui.cell_height_px.max(1),
            show_controls_bar: ui.show_controls_bar,
            keybindings: keybindings.clone(),
            grid: GridTracker::new(ui.grid_policy()),
        }
    }

    /// Grid shape used for the last frame.
    pub fn grid_dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    /// Render the entire UI for the visible market.
    pub fn render(&mut self, frame: &mut Frame, store: &Store, cache: &MarketCache) {
        let app = &store.app;
        let feed = cache.get(app.market);
        let layout = Layout::new(frame.area(), self.show_controls_bar, feed.error.is_some());

        StatusBar::render(frame, layout.status_area, app, feed, &self.palette);

        if let Some(area) = layout.controls_area {
            ControlsBar::render(frame, area, app, &self.keybindings, &self.palette);
        }

        if let (Some(area), Some(error)) = (layout.banner_area, &feed.error) {
            widgets::render_error(frame, area, error, &self.palette);
        }

        // Reserve slots for the requested count until data arrives
        let item_count = feed.item_count().unwrap_or(app.top_n as usize);
        let (width, height) =
            area_in_pixels(layout.grid_area, self.cell_width_px, self.cell_height_px);
        let dims = self.grid.observe(item_count, width, height);

        if let Some(message) = widgets::placeholder(feed) {
            widgets::render_placeholder(frame, layout.grid_area, message, &self.palette);
        } else if let Some(data) = &feed.data {
            let slots = card_areas(layout.grid_area, dims, data.items.len());
            for (item, area) in data.items.iter().zip(slots) {
                CoinCard::render(frame, area, item, &self.palette);
            }
        }

        if app.show_help {
            HelpPanel::render(frame, frame.area(), &self.keybindings, &self.palette);
        }
    }
}
