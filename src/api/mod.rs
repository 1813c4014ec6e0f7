//! Ranking backend integration.
//!
//! This module provides the transport seam ([`DataClient`]), its HTTP
//! implementation, the serde wire types and their conversion to state types.

mod client;
mod converter;
pub mod wire;

#[cfg(test)]
pub use client::MockDataClient;
pub use client::{DataClient, HttpDataClient, HttpDataClientBuilder};
pub use converter::DataConverter;
