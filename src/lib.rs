/*!
 * # srtshift
 *
 * A Rust library for re-synchronizing SRT subtitle files by a fixed
 * millisecond offset.
 *
 * ## Features
 *
 * - Locate every `HH:MM:SS,mmm --> HH:MM:SS,mmm` range in an SRT document
 * - Shift each timestamp forward (delay) or backward (speed up)
 * - Preserve all caption text, indices, and whitespace byte-for-byte
 * - Explicit 24-hour wrap-around semantics for shifts crossing midnight
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timestamp`: Parsing, shifting, and formatting of clock timestamps
 * - `extractor`: Position-anchored timestamp range scanning
 * - `rewriter`: Span-based document rewriting
 * - `app_controller`: Main application controller driving the pipeline
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_controller;
pub mod errors;
pub mod extractor;
pub mod file_utils;
pub mod rewriter;
pub mod timestamp;

// Re-export main types for easier usage
pub use app_controller::{Controller, Operation};
pub use errors::{AppError, TimestampError};
pub use extractor::{find_timestamp_ranges, RangeMatch};
pub use timestamp::Timestamp;
