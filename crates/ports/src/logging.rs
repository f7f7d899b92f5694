// crates/ports/src/logging.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Default output shown to the user.
    Info,
    /// Extra tracing useful while debugging.
    Debug,
    /// How the result was obtained, for novice users.
    Verbose,
    Error,
}

/// Port for leveled logging; implementations decide which levels are shown.
pub trait Logger {
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    fn verbose(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Verbose, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }
}
