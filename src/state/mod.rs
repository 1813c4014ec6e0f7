//! State management for maxline.
//!
//! View parameters live in a small store updated through actions, in the
//! Redux/Elm style. Fetched rankings live in the [`MarketCache`], which only
//! the polling controller writes.

mod app_state;
mod market_cache;
mod query;
mod ranking;

pub use app_state::{
    AppState, CANDLE_LIMIT_STEP, MAX_CANDLE_LIMIT, MAX_TOP_N, MIN_CANDLE_LIMIT,
};
pub use market_cache::{MarketCache, MarketFeed};
pub use query::{Market, Query, Timeframe};
pub use ranking::{Candle, QueryResult, RankedItem, Source};

use crate::config::DashboardConfig;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Query parameters
    SetMarket(Market),
    NextTimeframe,
    PrevTimeframe,
    /// Step the candle limit by the given number of increments.
    AdjustCandleLimit(i32),
    AdjustTopN(i32),

    // Data refresh
    Refresh { force: bool },

    // UI actions
    ToggleHelp,
    /// The terminal was resized; the grid is re-measured on the next frame.
    Resized,

    // Quit
    Quit,
}

/// The view-parameter store.
#[derive(Debug, Default)]
pub struct Store {
    /// Application state.
    pub app: AppState,
}

impl Store {
    /// Create a new store seeded with the dashboard defaults.
    pub fn new(defaults: &DashboardConfig) -> Self {
        Self {
            app: AppState::new(defaults),
        }
    }

    /// Apply an action to update state.
    ///
    /// Returns `true` when the action changed the active query, meaning the
    /// caller must restart polling.
    pub fn reduce(&mut self, action: Action) -> bool {
        let before = self.app.query();

        match action {
            Action::SetMarket(market) => self.app.market = market,
            Action::NextTimeframe => self.app.timeframe = self.app.timeframe.next(),
            Action::PrevTimeframe => self.app.timeframe = self.app.timeframe.prev(),
            Action::AdjustCandleLimit(steps) => self.app.adjust_candle_limit(steps),
            Action::AdjustTopN(delta) => self.app.adjust_top_n(delta),

            // Handled by the polling controller
            Action::Refresh { .. } => {}

            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::Resized => {}

            Action::Quit => self.app.should_quit = true,
        }

        self.app.query() != before
    }
}
