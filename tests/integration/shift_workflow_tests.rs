/*!
 * End-to-end tests for the file-based re-synchronization workflow
 */

use std::fs;

use anyhow::Result;
use srtshift::app_controller::{Controller, Operation};
use srtshift::errors::AppError;
use srtshift::file_utils::FileManager;

use crate::common;

/// Test the full delay workflow: read, shift, write next to the input
#[test]
fn test_run_withDelay_shouldWriteShiftedFileNextToInput() -> Result<()> {
    let (dir, input_path) = common::write_temp_srt("episode.srt", &common::sample_document())?;
    let controller = Controller::new();

    let output_path = controller.run(&input_path, Operation::Prev, 2000)?;

    assert_eq!(output_path, dir.path().join("new_episode.srt"));
    let output = fs::read_to_string(&output_path)?;
    assert!(output.contains("00:00:12,000 --> 00:00:14,500"));
    assert!(output.contains("00:00:17,000 --> 00:00:19,000"));
    assert!(output.contains("00:01:02,250 --> 00:01:05,750"));

    // Input untouched
    assert_eq!(fs::read_to_string(&input_path)?, common::sample_document());

    Ok(())
}

/// Test the advance workflow with the documented scenario values
#[test]
fn test_run_withAdvance_shouldSubtractOffset() -> Result<()> {
    let srt = "1\n00:00:10,000 --> 00:00:12,500\nHello\n";
    let (_dir, input_path) = common::write_temp_srt("clip.srt", srt)?;
    let controller = Controller::new();

    let output_path = controller.run(&input_path, Operation::Next, 3000)?;

    let output = fs::read_to_string(&output_path)?;
    assert_eq!(output, "1\n00:00:07,000 --> 00:00:09,500\nHello\n");

    Ok(())
}

/// Test round-trip cancellation through two file runs
#[test]
fn test_run_withOppositeOperations_shouldRestoreOriginalContent() -> Result<()> {
    let (_dir, input_path) = common::write_temp_srt("episode.srt", &common::sample_document())?;
    let controller = Controller::new();

    let advanced = controller.run(&input_path, Operation::Next, 3000)?;
    let restored = controller.run(&advanced, Operation::Prev, 3000)?;

    assert_eq!(fs::read_to_string(&restored)?, common::sample_document());

    Ok(())
}

/// Test that duplicate caption blocks both end up shifted in the output file
#[test]
fn test_run_withDuplicateRanges_shouldShiftBothOccurrences() -> Result<()> {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nA\n\n2\n00:00:01,000 --> 00:00:02,000\nB\n";
    let (_dir, input_path) = common::write_temp_srt("dup.srt", srt)?;
    let controller = Controller::new();

    let output_path = controller.run(&input_path, Operation::Prev, 500)?;
    let output = fs::read_to_string(&output_path)?;

    assert_eq!(output.matches("00:00:01,500 --> 00:00:02,500").count(), 2);
    assert_eq!(output.matches("00:00:01,000 --> 00:00:02,000").count(), 0);

    Ok(())
}

/// Test that a document without ranges fails and writes no output file
#[test]
fn test_run_withNoTimestamps_shouldFailWithoutWritingOutput() -> Result<()> {
    let (dir, input_path) = common::write_temp_srt("notes.txt", "just some notes\nno ranges\n")?;
    let controller = Controller::new();

    let result = controller.run(&input_path, Operation::Prev, 1000);

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::NoTimestampsFound)
    ));
    assert!(!FileManager::file_exists(dir.path().join("new_notes.txt")));

    Ok(())
}

/// Test that a missing input file fails before any output is written
#[test]
fn test_run_withMissingInput_shouldFail() {
    let controller = Controller::new();
    let result = controller.run("/no/such/dir/episode.srt", Operation::Prev, 1000);
    assert!(result.is_err());
}
