//! Turning resolved records into terminal output.
//!
//! - [`layout`]: elastic tab stops shared by tables and their annotations
//! - [`columns`]: the two column sets and the explanations paired with them
//! - [`formatter`]: the metadata tables
//! - [`annotator`]: staircase explanations beneath a table
//! - [`json`]: machine-readable output

pub mod annotator;
pub mod columns;
pub mod formatter;
pub mod json;
pub mod layout;

pub use annotator::{Explanation, annotate, explain, write_explanation_text};
pub use columns::ColumnSet;
pub use formatter::{Table, write_table};
pub use json::write_json;
pub use layout::{TabLayout, write_lines};
