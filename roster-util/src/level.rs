use std::fmt;
use std::str::FromStr;

/// The five levels the `LOG` command accepts (specification §4.3).
///
/// `tracing` has no level above `ERROR`, so `Fault` maps onto `ERROR` for
/// filtering purposes but is kept as a distinct variant so the reply text
/// and any future differentiation (e.g. paging on `Fault` but not `Error`)
/// has somewhere to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Fault,
    Error,
    Info,
    Debug,
}

impl LogLevel {
    /// The `tracing_subscriber::filter::EnvFilter` directive this level maps to.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Fault | LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Off => "off",
            LogLevel::Fault => "fault",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

/// Error returned when a string isn't one of the five accepted level names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError(pub String);

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a valid log level", self.0)
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "fault" => Ok(LogLevel::Fault),
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(ParseLogLevelError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_accepted_token() {
        for tok in ["off", "fault", "error", "info", "debug"] {
            let lvl: LogLevel = tok.parse().unwrap();
            assert_eq!(lvl.to_string(), tok);
        }
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
