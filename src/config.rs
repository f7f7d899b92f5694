// src/config.rs
use crate::args::Args;
use derive_builder::Builder;
use fileinfo_domain::{OutputFormat, OutputMode, TabLayout};
use fileinfo_shared_kernel::PresentationError;
use std::path::PathBuf;

/// Resolved run configuration, read only after startup.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub paths: Vec<PathBuf>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub mode: OutputMode,
    #[builder(default)]
    pub layout: TabLayout,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .paths(args.paths)
            .format(OutputFormat::from(args.format))
            .mode(OutputMode::new(args.verbose, args.debug))
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
