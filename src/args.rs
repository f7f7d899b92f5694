// src/args.rs
use crate::options::OutputFormat;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fileinfo",
    version = crate::VERSION,
    about = "Show size, inode, modification time and permissions of files",
    after_help = "Example:\n  fileinfo /mnt\n  fileinfo -v ./Cargo.toml /tmp"
)]
pub struct Args {
    /// Enable verbose mode: explain every column of the output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug mode: trace every step to stdout
    #[arg(short, long)]
    pub debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Paths to files or directories
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}
