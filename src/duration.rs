//! Calendar-duration (`PT1H30M`) to minutes.

use log::warn;

use crate::error::ConversionFault;

/// Converts a `PT[<n>H][<n>M]` duration into whole minutes.
///
/// Missing or empty input is 0. A segment whose number cannot be read
/// counts as 0 while the other segment is still used.
pub fn to_minutes(duration: Option<&str>) -> u32 {
    let Some(duration) = duration else {
        return 0;
    };
    let duration = duration.trim();
    if duration.is_empty() {
        return 0;
    }

    let mut rest = duration.strip_prefix("PT").unwrap_or(duration);
    let mut minutes = 0;

    if let Some((hours, tail)) = rest.split_once('H') {
        minutes += segment_or_zero(hours, "hours").saturating_mul(60);
        rest = tail;
    }

    if let Some((mins, _)) = rest.split_once('M') {
        minutes = minutes.saturating_add(segment_or_zero(mins, "minutes"));
    }

    minutes
}

fn segment_or_zero(segment: &str, field: &'static str) -> u32 {
    parse_segment(segment, field).unwrap_or_else(|fault| {
        warn!("Ignoring duration segment: {}", fault);
        0
    })
}

fn parse_segment(segment: &str, field: &'static str) -> Result<u32, ConversionFault> {
    if segment.is_empty() {
        return Ok(0);
    }
    segment
        .parse::<u32>()
        .map_err(|_| ConversionFault::InvalidNumber {
            field,
            input: segment.to_string(),
        })
}
