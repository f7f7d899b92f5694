use crate::config::Config;
use anyhow::Result;
use fileinfo_infra::StdMetadataSource;
use fileinfo_ports::logging::Logger;
use fileinfo_usecase::ListInfo;
use std::io;

/// Runs one batch over `config.paths`, writing the report to stdout.
pub fn run(config: &Config, logger: &dyn Logger) -> Result<()> {
    let paths = &config.paths;
    logger.debug(format_args!("Arguments received from CLI: {paths:?}"));

    let source = StdMetadataSource::new();
    let usecase = ListInfo::new(&source, logger)
        .with_mode(config.mode)
        .with_layout(config.layout);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    usecase.run(&config.paths, config.format, &mut out)?;
    Ok(())
}
