use std::fmt;
use std::str::FromStr;

use roster_errors::ParseError;

/// A calendar day, stored as a `{year, month, day}` triple rather than
/// seconds-since-epoch, so that [`RosterDate::sort_key`] is exact and the
/// external `YYYY-MM-DD` grammar round-trips without timezone math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RosterDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl RosterDate {
    /// Ascending sort key used by `GET --sort:date`: `year*10000 + month*100 + day`.
    pub fn sort_key(&self) -> u32 {
        self.year as u32 * 10_000 + self.month as u32 * 100 + self.day as u32
    }
}

impl fmt::Display for RosterDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for RosterDate {
    type Err = ParseError;

    /// Parses exactly `YYYY-MM-DD`: digits at all non-separator positions,
    /// `-` at indices 4 and 7, per specification §4.4.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let invalid = || ParseError::InvalidFieldValue {
            field: "date".to_owned(),
            value: s.to_owned(),
        };

        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        for (i, b) in bytes.iter().enumerate() {
            if i == 4 || i == 7 {
                continue;
            }
            if !b.is_ascii_digit() {
                return Err(invalid());
            }
        }

        let year: u16 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u8 = s[5..7].parse().map_err(|_| invalid())?;
        let day: u8 = s[8..10].parse().map_err(|_| invalid())?;

        // No calendar range check: the grammar is purely lexical
        // (specification §4.4), so e.g. `2022-13-40` is accepted and stored
        // as written.
        Ok(RosterDate { year, month, day })
    }
}
