//! Usage text for the `HELP` command (specification §4.3).

const FOOTER: &str = "The above commands are not case sensitive.\n";

/// The full `HELP` reply: the concatenated usage strings of ADD, DEL, MOD,
/// GET, LOG, followed by the fixed footer line.
pub const HELP_TEXT: &str = concat!(
    "ADD id:<id> [name:<name>] [date:<YYYY-MM-DD>] [dept:<dept>] [pos:<pos>] - add a new staff record.\n",
    "DEL id:<id> | DEL * - remove one staff record, or every record.\n",
    "MOD id:<id> [name:<name>] [date:<YYYY-MM-DD>] [dept:<dept>] [pos:<pos>] - update fields of an existing staff record.\n",
    "GET id:<id> | GET [--sort:id|--sort:date] [name:<name>] [date:<YYYY-MM-DD>] [dept:<dept>] [pos:<pos>] [*] - look up one staff record, or scan and filter every record.\n",
    "LOG off|fault|error|info|debug - set the server log level.\n",
    "The above commands are not case sensitive.\n",
);
