use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::extractor::{self, RANGE_SEPARATOR};
use crate::file_utils::FileManager;
use crate::rewriter;
use crate::timestamp::Timestamp;

// @module: Application controller for subtitle re-synchronization

/// Shift direction selected on the command line.
///
/// The literal operation names come from the CLI contract: `prev` delays the
/// subtitles (adds the offset), `next` speeds them up (subtracts it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Delay subtitles: every timestamp moves later
    Prev,
    /// Speed up subtitles: every timestamp moves earlier
    Next,
}

impl Operation {
    /// Turn a non-negative magnitude into the signed offset this operation
    /// applies to every timestamp.
    pub fn signed_offset_ms(self, magnitude_ms: u64) -> Result<i64> {
        let magnitude = i64::try_from(magnitude_ms)
            .map_err(|_| anyhow!("Shift magnitude too large: {} ms", magnitude_ms))?;

        Ok(match self {
            Operation::Prev => magnitude,
            Operation::Next => -magnitude,
        })
    }
}

/// Main application controller for the re-synchronization pipeline
pub struct Controller;

impl Controller {
    // @method: Create a new controller
    pub fn new() -> Self {
        Controller
    }

    /// Run the full workflow: read the input file, shift every timestamp
    /// range by the requested offset, and write the result to
    /// `new_<original-filename>` next to the input.
    ///
    /// Returns the output path on success. No output file is created on any
    /// error, including a document with zero timestamp ranges.
    pub fn run<P: AsRef<Path>>(
        &self,
        input_file: P,
        operation: Operation,
        duration_ms: u64,
    ) -> Result<PathBuf> {
        let input_file = input_file.as_ref();

        if !FileManager::file_exists(input_file) {
            return Err(AppError::File(format!(
                "Input file does not exist: {:?}",
                input_file
            ))
            .into());
        }

        let offset_ms = operation.signed_offset_ms(duration_ms)?;
        info!(
            "Re-synchronizing {:?} by {} ms ({:?})",
            input_file, offset_ms, operation
        );

        let document = FileManager::read_to_string(input_file)?;
        let shifted = self.shift_document(&document, offset_ms)?;

        let output_path = FileManager::output_path(input_file);
        FileManager::write_to_file(&output_path, &shifted)?;

        info!("Wrote re-synchronized subtitles to {:?}", output_path);
        Ok(output_path)
    }

    /// Shift every timestamp range in the document by a signed offset,
    /// preserving all other bytes.
    ///
    /// Fails with [`AppError::NoTimestampsFound`] when the document contains
    /// no ranges at all: silently copying the input through unchanged would
    /// hide a wrong file path or a non-SRT input from the user.
    pub fn shift_document(&self, document: &str, offset_ms: i64) -> Result<String> {
        let matches = extractor::find_timestamp_ranges(document);
        if matches.is_empty() {
            return Err(AppError::NoTimestampsFound.into());
        }
        debug!("Found {} timestamp range(s)", matches.len());

        let mut replacements = Vec::with_capacity(matches.len());
        for range_match in &matches {
            replacements.push(Self::shift_range(&range_match.text, offset_ms)?);
        }

        rewriter::splice_replacements(document, &matches, &replacements)
    }

    /// Shift a single `start --> end` range string
    fn shift_range(range_text: &str, offset_ms: i64) -> Result<String> {
        // The extraction pattern guarantees exactly one separator
        let (start_raw, end_raw) = range_text
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| anyhow!("Invalid range text: {}", range_text))?;

        let start = Self::shift_timestamp(start_raw, offset_ms)?;
        let end = Self::shift_timestamp(end_raw, offset_ms)?;

        Ok(format!("{}{}{}", start, RANGE_SEPARATOR, end))
    }

    fn shift_timestamp(raw: &str, offset_ms: i64) -> Result<Timestamp> {
        let timestamp: Timestamp = raw
            .parse()
            .map_err(AppError::Timestamp)
            .with_context(|| format!("Failed to parse timestamp: {}", raw))?;

        // SRT has no date field, so shifts crossing midnight wrap modulo
        // 24 hours. Surface it: a wrapped timestamp near the start or end of
        // a video is almost never what the user wanted.
        if timestamp.shift_wraps(offset_ms) {
            warn!(
                "Timestamp {} wraps around midnight when shifted by {} ms",
                timestamp, offset_ms
            );
        }

        Ok(timestamp.shift(offset_ms))
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
