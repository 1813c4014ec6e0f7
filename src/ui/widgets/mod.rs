//! TUI widgets.

mod banner;
mod candle_chart;
mod coin_card;
mod controls_bar;
mod help;
mod status_bar;

pub use banner::{placeholder, render_error, render_placeholder};
pub use candle_chart::CandleChart;
pub use coin_card::CoinCard;
pub use controls_bar::ControlsBar;
pub use help::HelpPanel;
pub use status_bar::StatusBar;
