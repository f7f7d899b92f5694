use clap::{CommandFactory, Parser, error::ErrorKind};
use fileinfo::app;
use fileinfo::args::Args;
use fileinfo::config::Config;
use fileinfo_infra::{ConsoleLogger, init_tracing};
use fileinfo_ports::logging::Logger;
use fileinfo_shared_kernel::{ApplicationError, FileInfoError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            ConsoleLogger::default().error(format_args!("{e}"));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.mode);
    let logger = ConsoleLogger::new(config.mode);

    match app::run(&config, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(
                e.downcast_ref::<FileInfoError>(),
                Some(FileInfoError::Application(ApplicationError::NoPaths))
            ) {
                let usage = Args::command().render_help().to_string();
                logger.info(format_args!("{}", usage.trim_end()));
            }
            logger.error(format_args!("{e}"));
            ExitCode::FAILURE
        }
    }
}
