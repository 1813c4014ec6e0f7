//! # max-line - Top Gainers Dashboard
//!
//! A terminal dashboard showing the top price-moving instruments of a
//! crypto exchange, each as a card with a candlestick chart. Rankings come
//! from an HTTP backend and are refreshed on a fixed interval.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the event loop
//! - **API**: Backend transport and wire types
//! - **Polling**: Subscription lifecycle, periodic refresh, per-market cache
//! - **Grid**: Adaptive column/row computation for the card grid
//! - **State**: View parameters and ranking data types
//! - **Events**: Input handling and key bindings
//! - **UI**: Layout and rendering logic
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod polling;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use grid::{GridDimensions, compute_grid};
pub use polling::{PollingController, SubscriptionHandle};
