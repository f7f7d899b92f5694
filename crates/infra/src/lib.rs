// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod logging;
pub mod platform;

pub use filesystem::StdMetadataSource;
pub use logging::{ConsoleLogger, init_tracing};
