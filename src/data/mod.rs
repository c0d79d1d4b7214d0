//! Data models for the acquisition engine.
//!
//! This module holds the mutable state the polling scheduler maintains
//! between rounds and the pure formatting helpers the renderer uses.
//!
//! ## Submodules
//!
//! - [`series`]: Per-variable delta derivation and the bounded history ring
//! - [`target`]: Per-target status and round-result application
//! - [`format`]: Display formatting per variable kind (bytes, durations)
//!
//! ## Data Flow
//!
//! ```text
//! serde_json::Value (fetched tree)
//!        │
//!        ▼
//! Target::apply_document()      one call per target per round
//!        │
//!        └──▶ Series::observe()  per variable: delta + history append
//! ```

pub mod format;
pub mod series;
pub mod target;

pub use series::{Series, HISTORY_CAPACITY};
pub use target::{Target, TargetStatus};
