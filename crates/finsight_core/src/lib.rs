//! Financial recommendation engine
//!
//! This crate turns a snapshot of raw financial records into decision-support
//! outputs. It provides:
//! - A composite financial health score (savings rate, debt load, emergency fund)
//! - A ranked debt-payoff plan (avalanche, snowball, or hybrid ordering) with
//!   per-debt payoff timelines and interest projections
//! - Automatic allocation of the monthly surplus across debt, emergency fund,
//!   goals, and discretionary spending
//! - Ranked actionable payment suggestions across debts and upcoming bills
//! - Goal completion forecasts with milestone dates and success probability
//! - An emergency preparedness assessment
//!
//! Every function is a pure, synchronous transformation of its arguments:
//! no I/O, no clock reads, no shared state. The report date is always an
//! explicit parameter, so identical inputs produce identical outputs and
//! callers own all caching.
//!
//! ```ignore
//! use finsight_core::{Snapshot, evaluate};
//! use finsight_core::model::UserPreferences;
//!
//! let snapshot = Snapshot::default();
//! let preferences = UserPreferences::default();
//! let today = jiff::civil::date(2025, 6, 15);
//!
//! let report = evaluate(&snapshot, &preferences, today, 100.0);
//! println!("health score: {:.0}", report.health.score);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod allocation;
pub mod dates;
pub mod debt;
pub mod emergency;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod health;
pub mod metrics;
pub mod money;
pub mod snapshot;
pub mod suggestions;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use engine::evaluate;
pub use error::ValidationError;
pub use snapshot::Snapshot;
