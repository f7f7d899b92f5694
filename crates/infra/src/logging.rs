// crates/infra/src/logging.rs
use std::{
    fmt,
    io::{self, Write},
};

use fileinfo_domain::OutputMode;
use fileinfo_ports::logging::{Level, Logger};

/// Routes the `log` facade to stdout, enabled only in debug mode.
///
/// The filter comes from `mode` alone; the environment is not consulted.
pub fn init_tracing(mode: OutputMode) {
    let level = if mode.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .write_style(env_logger::WriteStyle::Never)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}

/// Logger writing user-facing text to the process streams.
///
/// Info always goes to stdout, verbose only when verbose mode is on, debug
/// through `log::debug!` and errors to stderr with an `ERROR: ` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    mode: OutputMode,
}

impl ConsoleLogger {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    fn write(
        &self,
        level: Level,
        args: fmt::Arguments<'_>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> io::Result<()> {
        match level {
            Level::Info => writeln!(stdout, "{args}"),
            Level::Verbose if self.mode.verbose => writeln!(stdout, "{args}"),
            Level::Verbose => Ok(()),
            Level::Debug => {
                log::debug!("{args}");
                Ok(())
            }
            Level::Error => writeln!(stderr, "ERROR: {args}"),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        // a closed stdout or stderr must not abort the run
        let _ = self.write(level, args, &mut io::stdout(), &mut io::stderr());
    }
}
