use std::fmt;
use std::str::FromStr;

use crate::errors::TimestampError;

// @module: Timestamp parsing, shifting, and formatting

/// Milliseconds in one 24-hour day
pub const MS_PER_DAY: i64 = 86_400_000;

/// A clock time within a single 24-hour day, at millisecond precision.
///
/// Stored as total milliseconds since midnight. SRT timestamps carry no date
/// component, so arithmetic that crosses midnight wraps modulo 24 hours; see
/// [`Timestamp::shift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    ms: u32,
}

impl Timestamp {
    /// Build a timestamp from total milliseconds since midnight - used by
    /// tests and external consumers. Values at or past 24:00:00,000 are
    /// rejected.
    #[allow(dead_code)]
    pub fn from_total_ms(ms: u32) -> Option<Self> {
        if i64::from(ms) < MS_PER_DAY {
            Some(Timestamp { ms })
        } else {
            None
        }
    }

    /// Total milliseconds since midnight
    #[allow(dead_code)]
    pub fn total_ms(self) -> u32 {
        self.ms
    }

    pub fn hours(self) -> u32 {
        self.ms / 3_600_000
    }

    pub fn minutes(self) -> u32 {
        (self.ms % 3_600_000) / 60_000
    }

    pub fn seconds(self) -> u32 {
        (self.ms % 60_000) / 1_000
    }

    pub fn millis(self) -> u32 {
        self.ms % 1_000
    }

    /// Shift this timestamp by a signed millisecond offset.
    ///
    /// There is no date component, so the result wraps modulo 24 hours:
    /// `00:00:00,000` shifted by -1 ms yields `23:59:59,999`. Callers that
    /// need to surface the wrap check [`Timestamp::shift_wraps`] first.
    pub fn shift(self, offset_ms: i64) -> Self {
        let shifted = (i64::from(self.ms) + offset_ms).rem_euclid(MS_PER_DAY);
        // rem_euclid keeps the result in [0, MS_PER_DAY), which fits u32
        Timestamp { ms: shifted as u32 }
    }

    /// Whether shifting by this offset crosses the midnight boundary
    pub fn shift_wraps(self, offset_ms: i64) -> bool {
        let raw = i64::from(self.ms) + offset_ms;
        raw < 0 || raw >= MS_PER_DAY
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    /// Parse an `H:M:S,f` timestamp string.
    ///
    /// Hours, minutes, and seconds accept one or two digits; the fractional
    /// field accepts one to three digits and is read as a fraction of a
    /// second, so `,5` means 500 ms, not 5 ms. Out-of-range components
    /// (hours > 23, minutes > 59, seconds > 59) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimestampError::Malformed(s.to_string());

        let parts: Vec<&str> = s.split(&[':', ','][..]).collect();
        if parts.len() != 4 {
            return Err(malformed());
        }

        let digits = |part: &str, max_len: usize| -> Result<u32, TimestampError> {
            if part.is_empty() || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u32>().map_err(|_| malformed())
        };

        let hours = digits(parts[0], 2)?;
        let minutes = digits(parts[1], 2)?;
        let seconds = digits(parts[2], 2)?;
        // Fractional seconds: right-pad to milliseconds ("5" -> 500, "50" -> 500)
        let millis = digits(parts[3], 3)? * 10u32.pow((3 - parts[3].len()) as u32);

        let out_of_range = |component, value| TimestampError::ComponentOutOfRange {
            timestamp: s.to_string(),
            component,
            value,
        };

        if hours > 23 {
            return Err(out_of_range("hours", hours));
        }
        if minutes > 59 {
            return Err(out_of_range("minutes", minutes));
        }
        if seconds > 59 {
            return Err(out_of_range("seconds", seconds));
        }

        Ok(Timestamp {
            ms: hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis,
        })
    }
}

impl fmt::Display for Timestamp {
    /// Format as SRT `HH:MM:SS,mmm` with fixed-width zero-padded fields
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.millis()
        )
    }
}
