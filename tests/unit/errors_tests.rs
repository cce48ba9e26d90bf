/*!
 * Tests for error types and conversions
 */

use std::error::Error;
use std::io;
use std::path::PathBuf;
use srt2ass::errors::{AppError, ConversionError};

#[test]
fn test_conversionError_fileRead_shouldDisplayPathAndSource() {
    let error = ConversionError::FileRead {
        path: PathBuf::from("movie.srt"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    let display = error.to_string();

    assert!(display.contains("movie.srt"));
    assert!(display.contains("no such file"));
    assert!(error.source().is_some());
}

#[test]
fn test_conversionError_malformedTimestamp_shouldDisplayCorrectly() {
    let error = ConversionError::MalformedTimestamp("cue 3: '00:00'".to_string());

    assert_eq!(error.to_string(), "Malformed timestamp: cue 3: '00:00'");
}

#[test]
fn test_appError_fromConversionError_shouldWrap() {
    let error: AppError = ConversionError::MalformedTimestamp("x".to_string()).into();

    assert!(matches!(error, AppError::Conversion(_)));
    assert!(error.to_string().contains("Malformed timestamp"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let error: AppError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();

    assert!(matches!(error, AppError::File(_)));
    assert!(error.to_string().contains("denied"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error: AppError = anyhow::anyhow!("something odd").into();

    assert!(matches!(error, AppError::Unknown(_)));
}
