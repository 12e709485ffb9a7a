//! The query engine (specification §4.3): translates a parsed [`Query`]
//! into database-facade operations and a human-readable reply string.
//!
//! Permission enforcement for `LOG`/`EXIT` (local channel only) happens at
//! the dispatcher, *before* a [`Query`] ever reaches [`execute`] —
//! specification §4.6 dispatch step 2. This crate therefore never sees a
//! remote `LOG`/`EXIT` and never needs to reject one itself.

mod format;
mod help;
mod sort;

use roster_db::Database;
use roster_parser::Query;
use roster_util::{LogLevel, LoggingHandle};
use tracing::{debug, info, warn};

pub use help::HELP_TEXT;

/// The fixed reply for any request that fails to parse, or that names
/// `LOG`/`EXIT` from a channel that isn't the local one (specification
/// §4.4, §4.6 step 2: the dispatcher rejects those exactly like a parse
/// failure).
pub const PARSE_FAILURE_REPLY: &str = "Failed to parse user input for invalid command or info.";

/// What the dispatcher should do with the result of [`execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Write `reply` back to the originating channel and keep serving.
    Reply(String),
    /// Write `reply`, then tear down every connection and stop the server.
    Exit(String),
}

impl Outcome {
    pub fn reply(&self) -> &str {
        match self {
            Outcome::Reply(s) | Outcome::Exit(s) => s,
        }
    }
}

/// Executes one already-parsed, already-authorized [`Query`] against `db`.
pub fn execute(db: &mut Database, query: Query, logging: &LoggingHandle) -> Outcome {
    match query {
        Query::Add(record) => execute_add(db, record),
        Query::Del { id, all } => execute_del(db, id, all),
        Query::Mod(patch) => execute_mod(db, patch),
        Query::Get { predicate, sort } => execute_get(db, predicate, sort),
        Query::Log(level) => execute_log(logging, level),
        Query::Help => Outcome::Reply(help::HELP_TEXT.to_owned()),
        Query::Exit => Outcome::Exit(String::new()),
    }
}

fn execute_add(db: &mut Database, record: roster_model::Record) -> Outcome {
    let id = record.id;
    match db.add(record) {
        Ok(()) => {
            info!(id, "staff added");
            Outcome::Reply(format!("The staff [{id}] is added."))
        }
        Err(e) => {
            warn!(id, error = %e, "add failed");
            Outcome::Reply(format!("Failed to add the staff [{id}]."))
        }
    }
}

fn execute_del(db: &mut Database, id: Option<u64>, all: bool) -> Outcome {
    if all {
        let _ = db.delete_all();
        info!("all staff removed");
        return Outcome::Reply("All staffs are removed.".to_owned());
    }
    let id = id.expect("parser guarantees DEL carries an id when not `all`");
    match db.remove(id) {
        Ok(()) => {
            info!(id, "staff removed");
            Outcome::Reply(format!("The staff [{id}] is removed."))
        }
        Err(e) => {
            debug!(id, error = %e, "remove failed");
            Outcome::Reply(format!("Failed to remove the staff [{id}]."))
        }
    }
}

fn execute_mod(db: &mut Database, patch: roster_model::Record) -> Outcome {
    let id = patch.id;
    match db.modify(&patch) {
        Ok(()) => {
            info!(id, "staff modified");
            Outcome::Reply(format!("Info of the staff [{id}] is modified."))
        }
        Err(e) => {
            debug!(id, error = %e, "modify failed");
            Outcome::Reply(format!("Failed to modify info of the staff [{id}]."))
        }
    }
}

fn execute_get(
    db: &Database,
    predicate: roster_model::Predicate,
    sort: Option<roster_parser::SortKey>,
) -> Outcome {
    if let Some(id) = predicate.id {
        return match db.get_by_id(id) {
            Some(record) => Outcome::Reply(format::render_record(record)),
            None => Outcome::Reply(format!("Staff with id [{id}] is not found.")),
        };
    }

    let mut records = db.get_by_predicate(&predicate);
    if records.is_empty() {
        return Outcome::Reply("No items are found.".to_owned());
    }
    sort::sort_records(&mut records, sort);

    let mut reply = String::new();
    for record in records {
        reply.push_str(&format::render_record(record));
    }
    Outcome::Reply(reply)
}

fn execute_log(logging: &LoggingHandle, level: LogLevel) -> Outcome {
    let _ = logging.set_level(level);
    info!(%level, "log level changed");
    Outcome::Reply("LOG level is setted.".to_owned())
}
