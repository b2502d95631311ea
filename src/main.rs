// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::app_controller::{Controller, Operation};

mod app_controller;
mod errors;
mod extractor;
mod file_utils;
mod rewriter;
mod timestamp;

/// CLI Wrapper for Operation to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOperation {
    /// Delay the subtitles (add the offset)
    Prev,
    /// Speed up the subtitles (subtract the offset)
    Next,
}

impl From<CliOperation> for Operation {
    fn from(cli_operation: CliOperation) -> Self {
        match cli_operation {
            CliOperation::Prev => Operation::Prev,
            CliOperation::Next => Operation::Next,
        }
    }
}

/// srtshift - SRT subtitle re-synchronization
///
/// Shifts every timestamp in an SRT file by a fixed millisecond offset and
/// writes the result to a new file next to the input.
#[derive(Parser, Debug)]
#[command(name = "srtshift")]
#[command(version = "1.0.0")]
#[command(about = "Re-synchronize SRT subtitle timestamps by a fixed offset")]
#[command(long_about = "srtshift re-synchronizes an SRT subtitle file whose timings drift from the
video's audio by a constant amount. The corrected subtitles are written to
new_<original-filename> in the same directory; the input is never modified.

EXAMPLES:
    srtshift movie.srt prev 5000    # Delay subtitles by 5 seconds
    srtshift movie.srt next 3000    # Speed subtitles up by 3 seconds")]
struct CommandLineOptions {
    /// Path to the SRT file to re-synchronize
    #[arg(value_name = "FILE_PATH")]
    file_path: PathBuf,

    /// Shift direction: 'prev' delays subtitles, 'next' speeds them up
    #[arg(value_name = "OPERATION", value_enum)]
    operation: CliOperation,

    /// Shift magnitude in milliseconds (non-negative)
    #[arg(value_name = "MILLISECONDS")]
    milliseconds: u64,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap. Argument errors go to stdout,
    // matching the CLI contract automation depends on.
    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            println!("{}", e);
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 2,
            };
            std::process::exit(code);
        }
    };

    let controller = Controller::new();
    match controller.run(&cli.file_path, cli.operation.into(), cli.milliseconds) {
        Ok(output_path) => {
            info!("Output written to {:?}", output_path);
            println!("#### Your new file is ready. ###");
            Ok(())
        }
        Err(e) => {
            println!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
