use clap::Parser;

use crate::DEFAULT_PORT;

/// Command-line options for the `roster-client` binary (specification §4.7, §6).
#[derive(Debug, Parser)]
#[command(name = "roster-client", about = "Interactive client for the roster server")]
pub struct Options {
    /// Server address, as `host` or `host:port`. Defaults to `127.0.0.1:16166`.
    #[arg(default_value = "127.0.0.1")]
    pub target: String,
}

impl Options {
    /// Resolves `target` into a `host:port` string, applying the default
    /// port when the user didn't supply one.
    pub fn server_address(&self) -> String {
        if self.target.contains(':') {
            self.target.clone()
        } else {
            format!("{}:{DEFAULT_PORT}", self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_the_default_port_appended() {
        let opts = Options {
            target: "example.com".to_owned(),
        };
        assert_eq!(opts.server_address(), "example.com:16166");
    }

    #[test]
    fn host_with_explicit_port_is_left_alone() {
        let opts = Options {
            target: "example.com:9000".to_owned(),
        };
        assert_eq!(opts.server_address(), "example.com:9000");
    }
}
