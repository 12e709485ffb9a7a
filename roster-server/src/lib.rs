//! The connection multiplexer and request dispatcher (specification §4.6):
//! owns the listening socket, the bounded connection table, the readiness
//! loop (here, a `tokio::select!` event loop rather than C `select()` —
//! specification Design Note "Cooperative single-threaded loop"), and
//! per-request routing.

pub mod cli;
mod dispatch;
mod dispatcher;

pub use dispatch::{dispatch_line, DispatchOutcome};
pub use dispatcher::{Dispatcher, DEFAULT_MAX_CONNS, DEFAULT_PORT};
