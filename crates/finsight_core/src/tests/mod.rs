//! Integration tests for the recommendation engine
//!
//! Tests are organized by topic:
//! - `health` - Composite health score properties and monotonicity
//! - `debt_plan` - Amortization math, strategy rankings, waterfall allocation
//! - `allocation` - Surplus splits and exact-sum rounding
//! - `forecasting` - Goal projections, milestones, and probability bounds
//! - `suggestions` - Ranked payment list assembly and stale-id handling
//! - `scenarios` - End-to-end record-set scenarios through `evaluate`

mod forecasting;
