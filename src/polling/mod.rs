//! Market-keyed polling of the ranking backend.
//!
//! The [`PollingController`] owns the [`MarketCache`](crate::state::MarketCache)
//! and at most one live subscription. Timers and fetches run as tokio tasks
//! that only send [`PollEvent`]s back; the event loop hands each event to
//! [`PollingController::handle`], which applies it only if it belongs to the
//! live subscription.

mod controller;

pub use controller::PollingController;

use crate::error::Result;
use crate::state::{Query, QueryResult};
use std::time::Duration;

/// Default period between refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Identifies one subscription. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    generation: u64,
}

impl SubscriptionHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Lifecycle of the most recent subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionState {
    #[default]
    Idle,
    Fetching,
    Applied,
    Failed,
    /// Terminal.
    Stopped,
}

/// Events sent from timer and fetch tasks to the event loop.
#[derive(Debug)]
pub enum PollEvent {
    /// The refresh timer fired.
    Tick { generation: u64 },
    /// A fetch finished.
    Completed {
        generation: u64,
        /// Issue order within the subscription.
        seq: u64,
        query: Query,
        outcome: Result<QueryResult>,
    },
}

impl PollEvent {
    /// Generation of the subscription that produced this event.
    pub fn generation(&self) -> u64 {
        match self {
            Self::Tick { generation } | Self::Completed { generation, .. } => *generation,
        }
    }
}
