/*!
 * Tests for error types and conversions
 */

use std::io;
use std::path::PathBuf;
use ccremover::errors::{AppError, CleanError};

#[test]
fn test_cleanError_read_shouldDisplayPathAndCause() {
    let error = CleanError::Read {
        path: PathBuf::from("movie.srt"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };

    let display = format!("{}", error);
    assert!(display.contains("Failed to read subtitle file"));
    assert!(display.contains("movie.srt"));
    assert!(display.contains("no such file"));
    assert!(error.captions().is_empty());
}

#[test]
fn test_cleanError_write_shouldKeepExtractedCaptions() {
    let error = CleanError::Write {
        path: PathBuf::from("output/movie.srt"),
        captions: vec!["[music]".to_string()],
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };

    assert!(format!("{}", error).contains("Failed to write cleaned subtitle file"));
    assert_eq!(error.captions(), ["[music]"]);
    assert_eq!(error.path(), &PathBuf::from("output/movie.srt"));
}

#[test]
fn test_cleanError_shouldExposeSource() {
    use std::error::Error;

    let error = CleanError::Read {
        path: PathBuf::from("movie.srt"),
        source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    };

    assert!(error.source().is_some());
}

#[test]
fn test_appError_fromAnyhow_shouldKeepContextChain() {
    let error = anyhow::Error::new(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        .context("Failed to scan directory: episodes");

    let app: AppError = error.into();

    match app {
        AppError::Unknown(msg) => {
            assert!(msg.contains("Failed to scan directory: episodes"));
            assert!(msg.contains("denied"));
        }
        other => panic!("expected unknown error, got {:?}", other),
    }
}

#[test]
fn test_appError_config_shouldDisplayCorrectly() {
    let app = AppError::Config("bad".to_string());

    assert_eq!(format!("{}", app), "Configuration error: bad");
}
