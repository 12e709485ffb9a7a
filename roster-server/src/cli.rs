use clap::Parser;
use roster_util::LogLevel;

use crate::dispatcher::{DEFAULT_MAX_CONNS, DEFAULT_PORT};

/// Command-line options for the `roster-server` binary.
#[derive(Debug, Parser)]
#[command(name = "roster-server", about = "Employee record store and query server")]
pub struct Options {
    /// Address to bind the listening socket to.
    #[arg(long, env = "ROSTER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the listening socket to (specification §6).
    #[arg(long, env = "ROSTER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Maximum number of simultaneous remote connections (specification §5).
    #[arg(long, env = "ROSTER_MAX_CONNS", default_value_t = DEFAULT_MAX_CONNS)]
    pub max_conns: usize,

    /// Initial log level; can be changed at runtime with `LOG`.
    #[arg(long, env = "ROSTER_LOG_LEVEL", default_value = "info", value_parser = parse_log_level)]
    pub log_level: LogLevel,

    /// Growth threshold the in-memory table starts with.
    #[arg(long, env = "ROSTER_MAX_SIZE")]
    pub max_size: Option<usize>,
}

impl Options {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    s.parse().map_err(|e: roster_util::ParseLogLevelError| e.to_string())
}
