//! Comparison driver: an ordered policy list under one shared retry budget.
//!
//! Every mutation synchronously re-expands all schedules and replaces the
//! chart frame before returning. Identity is a stable per-policy id; the
//! "Config N" display labels are re-derived from list position on each
//! rebuild.
mod board;
pub use board::{Comparison, PolicyEntry};

mod editor;
pub use editor::{EditMode, PolicyDraft};

mod frame;
pub use frame::{ChartColumn, ChartFrame};
