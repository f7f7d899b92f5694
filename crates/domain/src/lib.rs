#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod report;

pub use config::{OutputFormat, OutputMode};
pub use model::PathRecord;
pub use report::{ColumnSet, Explanation, TabLayout, Table};
