//! Timestamp formatting for subtitle files.
//!
//! Converts a seconds offset into the two clock-style layouts subtitle
//! players expect: SRT (`HH:MM:SS,mmm`, hours always present) and WebVTT
//! (`MM:SS.mmm`, hours only when present or forced).
//!
//! Rounding convention: the offset is converted to whole milliseconds with
//! [`f64::round`], so exact `.5` ms ties round half away from zero
//! (`3661.2005` formats as `01:01:01,201`).

use crate::error::{Error, Result};

/// Format seconds as an SRT timestamp: `HH:MM:SS,mmm`.
///
/// The hours field is always rendered and widens naturally past 99 hours.
/// Negative or non-finite input is a caller bug and returns
/// [`Error::InvalidTimestamp`].
pub fn srt_timestamp(seconds: f64) -> Result<String> {
    let (hours, minutes, secs, millis) = split_millis(seconds)?;
    Ok(format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}"))
}

/// Format seconds as a WebVTT timestamp: `MM:SS.mmm`, or `HH:MM:SS.mmm`
/// when `always_include_hours` is set or the offset reaches one hour.
pub fn vtt_timestamp(seconds: f64, always_include_hours: bool) -> Result<String> {
    let (hours, minutes, secs, millis) = split_millis(seconds)?;
    if always_include_hours || hours > 0 {
        Ok(format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}"))
    } else {
        Ok(format!("{minutes:02}:{secs:02}.{millis:03}"))
    }
}

/// Decompose seconds into (hours, minutes, seconds, milliseconds).
///
/// The remainder is carried through each division, so values like 59.9995s
/// roll over cleanly to the next minute instead of mis-carrying.
fn split_millis(seconds: f64) -> Result<(u64, u64, u64, u64)> {
    // NaN fails a `< 0.0` comparison, so check finiteness explicitly
    // rather than letting `as u64` saturate it to zero.
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::InvalidTimestamp(seconds));
    }

    let mut millis = (seconds * 1000.0).round() as u64;

    let hours = millis / 3_600_000;
    millis -= hours * 3_600_000;
    let minutes = millis / 60_000;
    millis -= minutes * 60_000;
    let secs = millis / 1_000;
    millis -= secs * 1_000;

    Ok((hours, minutes, secs, millis))
}
