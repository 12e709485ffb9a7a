use roster_db::Database;
use roster_parser::{parse_line, Query};
use roster_query::{execute, Outcome, PARSE_FAILURE_REPLY};
use roster_util::LoggingHandle;

/// What the caller should do after one request has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Write `reply` to the originating channel and keep serving.
    Reply(String),
    /// Write `reply`, then shut the whole server down.
    Shutdown(String),
}

/// Runs one request line through the parser, the local-channel permission
/// check, and the query engine (specification §4.6 "Dispatch").
///
/// `is_local` is true only for the process's own standard input — the
/// single channel authorized to issue `LOG`/`EXIT` (specification §4.6,
/// §6).
pub fn dispatch_line(
    db: &mut Database,
    logging: &LoggingHandle,
    line: &str,
    is_local: bool,
) -> DispatchOutcome {
    let query = match parse_line(line) {
        Ok(q) => q,
        Err(_) => return DispatchOutcome::Reply(PARSE_FAILURE_REPLY.to_owned()),
    };

    if matches!(query, Query::Log(_) | Query::Exit) && !is_local {
        return DispatchOutcome::Reply(PARSE_FAILURE_REPLY.to_owned());
    }

    match execute(db, query, logging) {
        Outcome::Reply(reply) => DispatchOutcome::Reply(reply),
        Outcome::Exit(reply) => DispatchOutcome::Shutdown(reply),
    }
}
