use std::io;

use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, TermLogger, TerminalMode, WriteLogger};

use crate::driver::{Report, Strategy, Width};
use crate::sequence::Ordinal;

/// Prints terms of the sequence 1, 1, 2, 3, 5, ... one per line.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// First ordinal to print.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub from: Ordinal,

    /// Last ordinal to print (inclusive).
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub to: Ordinal,

    /// How to compute the terms.
    #[arg(long, value_enum, default_value_t = Strategy::Recursive)]
    pub strategy: Strategy,

    /// Width of the unsigned word the terms wrap in.
    #[arg(long, value_enum, default_value_t = Width::U32)]
    pub width: Width,

    /// Print debug information.
    #[arg(long, short)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn report(&self) -> Report {
        Report {
            from: self.from,
            to: self.to,
            strategy: self.strategy,
            width: self.width,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

/// Installs the global logger on stderr, so stdout only carries the terms.
///
/// Falls back to a plain stderr writer when no terminal is attached. Fails
/// if a logger is already installed.
pub fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr).is_err() {
        WriteLogger::init(level, Config::default(), io::stderr())?;
    }
    Ok(())
}
