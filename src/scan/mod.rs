//! Filtered directory scanning.
//!
//! The scanner walks a project tree top-down, prunes ignored directories
//! before descending into them, and collects the surviving file paths in a
//! deterministic order.

pub mod filter;
pub mod walker;

pub use filter::{IgnoreSet, PathFilter};
pub use walker::{ScanError, ScanOutcome, Scanner};
