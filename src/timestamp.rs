use crate::errors::ConversionError;

// @module: SRT to ASS timestamp conversion

/// Convert an SRT timestamp (`H:MM:SS,mmm`) to an ASS timestamp (`H:MM:SS.cc`).
///
/// Hours are printed without padding, minutes and seconds are padded to two
/// digits and the milliseconds are truncated to centiseconds.
pub fn srt_to_ass(srt_time: &str) -> Result<String, ConversionError> {
    let malformed = || ConversionError::MalformedTimestamp(format!("'{}'", srt_time));

    let parts: Vec<&str> = srt_time.split(':').collect();
    let [hours, minutes, seconds_millis] = parts.as_slice() else {
        return Err(malformed());
    };

    let (seconds, millis) = seconds_millis.split_once(',').ok_or_else(malformed)?;
    if millis.contains(',') {
        return Err(malformed());
    }

    let parse = |field: &str| field.trim().parse::<u64>().map_err(|_| malformed());
    let hours = parse(hours)?;
    let minutes = parse(minutes)?;
    let seconds = parse(seconds)?;
    let millis = parse(millis)?;

    Ok(format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, millis / 10))
}
