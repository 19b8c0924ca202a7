//! report_core - Core types and helpers for the KPI shift-report workflow
//!
//! This crate provides the foundational pieces used across the report crates:
//! - `record` - the per-session field record and shift vocabulary
//! - `keys` - canonical field key names shared by the state machine and renderer
//! - `parse` - lenient amount parsing, strict date validation, formatting
//! - `render` - the fixed-layout report renderer

pub mod keys;
pub mod parse;
pub mod record;
pub mod render;

// Re-export commonly used types
pub use record::{FieldValue, Record, Register, Shift};
pub use render::render_report;
