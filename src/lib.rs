//! Regional Dashboard report service
//!
//! Aggregates submitted sales revenue per sales person from the host ERP's
//! database and compares it with their targets, both overall and for the SIL
//! item group.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::health;
pub use modules::registry;
pub use modules::reports;
