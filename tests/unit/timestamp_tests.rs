/*!
 * Tests for SRT to ASS timestamp conversion
 */

use srt2ass::errors::ConversionError;
use srt2ass::timestamp::srt_to_ass;

#[test]
fn test_srt_to_ass_withValidTimestamp_shouldUseCentiseconds() {
    assert_eq!(srt_to_ass("00:01:02,345").unwrap(), "0:01:02.34");
    assert_eq!(srt_to_ass("01:23:45,678").unwrap(), "1:23:45.67");
    assert_eq!(srt_to_ass("00:00:02,500").unwrap(), "0:00:02.50");
}

#[test]
fn test_srt_to_ass_withSubCentisecondMillis_shouldTruncate() {
    assert_eq!(srt_to_ass("00:00:00,009").unwrap(), "0:00:00.00");
    assert_eq!(srt_to_ass("00:00:00,999").unwrap(), "0:00:00.99");
    assert_eq!(srt_to_ass("00:00:59,015").unwrap(), "0:00:59.01");
}

#[test]
fn test_srt_to_ass_withSurroundingWhitespace_shouldConvert() {
    assert_eq!(srt_to_ass(" 00:00:01,000 ").unwrap(), "0:00:01.00");
}

#[test]
fn test_srt_to_ass_withDotSeparator_shouldFail() {
    let result = srt_to_ass("00:01:02.345");
    assert!(matches!(result, Err(ConversionError::MalformedTimestamp(_))));
}

#[test]
fn test_srt_to_ass_withMissingHourGroup_shouldFail() {
    assert!(srt_to_ass("01:02,345").is_err());
    assert!(srt_to_ass("00:00:01:02,345").is_err());
}

#[test]
fn test_srt_to_ass_withNonNumericField_shouldFail() {
    assert!(srt_to_ass("aa:00:00,000").is_err());
    assert!(srt_to_ass("00:00:00,").is_err());
    assert!(srt_to_ass("").is_err());
}

#[test]
fn test_srt_to_ass_withMalformedInput_shouldMentionTimestampInError() {
    let error = srt_to_ass("garbage").unwrap_err();
    assert!(error.to_string().contains("garbage"));
}
