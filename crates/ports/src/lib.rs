//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`metadata`]: the operating system's file-metadata query facility
//! - [`logging`]: leveled output for informational, verbose and debug text
//!
//! These ports keep the use case independent of `std::fs` and of the
//! process output streams.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod logging;
pub mod metadata;
