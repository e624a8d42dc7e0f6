//! Parsing of human-written durations such as `24h` or `1h30m`.

use std::time::Duration;

/// Parses a duration such as `24h`, `90m`, `1h30m` or `250ms`.
///
/// A bare integer is read as seconds. Returns `None` for anything
/// else, including fractional and negative values.
///
/// ```
/// use std::time::Duration;
/// use tg_shared::duration::parse_duration;
///
/// assert_eq!(parse_duration("24h"), Some(Duration::from_secs(86_400)));
/// assert_eq!(parse_duration("1h30m"), Some(Duration::from_secs(5_400)));
/// assert_eq!(parse_duration("soon"), None);
/// ```
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    if let Ok(secs) = input.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    humantime::parse_duration(input).ok()
}
