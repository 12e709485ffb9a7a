use std::net::SocketAddr;

use roster_db::Database;
use roster_util::{LoggingHandle, Shutdown};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::dispatch::{dispatch_line, DispatchOutcome};

/// Canonical TCP port (specification §6).
pub const DEFAULT_PORT: u16 = 16166;

/// Connection table capacity (specification §4.6/§5).
pub const DEFAULT_MAX_CONNS: usize = 8;

struct ConnEvent {
    slot: usize,
    kind: ConnEventKind,
}

enum ConnEventKind {
    Line(String),
    Closed,
}

type ConnTable = Vec<Option<OwnedWriteHalf>>;

/// Owns the database, the log-level handle, and the bounded connection
/// table; drives the readiness loop (specification §4.6).
///
/// A single `tokio::select!` loop stands in for the C source's `select()`
/// readiness set: every suspension point (accept, the local channel, every
/// open connection) is polled once per iteration with no ordering guarantee
/// beyond "every ready source is serviced" (specification §5), and all
/// database access happens from this one task, so `roster_store::Table`
/// needs no internal locking.
pub struct Dispatcher {
    db: Database,
    logging: LoggingHandle,
    max_conns: usize,
}

impl Dispatcher {
    pub fn new(db: Database, logging: LoggingHandle, max_conns: usize) -> Self {
        Dispatcher {
            db,
            logging,
            max_conns,
        }
    }

    /// Runs until `EXIT` arrives on `local` or `shutdown` is triggered
    /// externally. `local` stands in for the process's standard input (the
    /// privileged channel, specification §4.6); `local_out` stands in for
    /// standard output.
    pub async fn run<R, W>(
        mut self,
        listener: TcpListener,
        local: R,
        mut local_out: W,
        shutdown: Shutdown,
    ) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut table: ConnTable = (0..self.max_conns).map(|_| None).collect();
        let (events_tx, mut events_rx) = mpsc::channel::<ConnEvent>(64);
        let mut local_lines = local.lines();

        loop {
            tokio::select! {
                biased;

                _ = shutdown.wait() => break,

                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, addr)) => accept_connection(stream, addr, &mut table, &events_tx),
                        Err(e) => warn!(error = %e, "accept failed"),
                    }
                }

                line = local_lines.next_line() => {
                    match line {
                        Ok(Some(text)) => {
                            if text.trim().is_empty() {
                                continue;
                            }
                            match dispatch_line(&mut self.db, &self.logging, &text, true) {
                                DispatchOutcome::Reply(reply) => {
                                    write_local_reply(&mut local_out, &reply).await;
                                }
                                DispatchOutcome::Shutdown(reply) => {
                                    write_local_reply(&mut local_out, &reply).await;
                                    shutdown.trigger();
                                    break;
                                }
                            }
                        }
                        Ok(None) => {
                            // EOF on the local channel is ignored (specification §4.6 step 3).
                        }
                        Err(e) => error!(error = %e, "error reading local channel"),
                    }
                }

                event = events_rx.recv() => {
                    if let Some(event) = event {
                        handle_conn_event(&mut self.db, &self.logging, &mut table, event).await;
                    }
                }
            }
        }

        for slot in table.iter_mut() {
            *slot = None;
        }
        Ok(())
    }
}

async fn write_local_reply<W: AsyncWrite + Unpin>(out: &mut W, reply: &str) {
    let _ = out.write_all(reply.as_bytes()).await;
    let _ = out.write_all(b"\n").await;
    let _ = out.flush().await;
}

fn accept_connection(
    stream: TcpStream,
    addr: SocketAddr,
    table: &mut ConnTable,
    events_tx: &mpsc::Sender<ConnEvent>,
) {
    let slot = match table.iter().position(|s| s.is_none()) {
        Some(slot) => slot,
        None => {
            warn!(%addr, "connection table full, closing new connection");
            return;
        }
    };

    info!(%addr, slot, "accepted connection");
    let (read_half, write_half) = stream.into_split();
    table[slot] = Some(write_half);

    let events_tx = events_tx.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(read_half).lines();
        loop {
            let event = match lines.next_line().await {
                Ok(Some(text)) => {
                    // Lines shorter than two bytes are skipped (specification §4.6 step 4).
                    if text.len() < 2 {
                        continue;
                    }
                    ConnEvent {
                        slot,
                        kind: ConnEventKind::Line(text),
                    }
                }
                Ok(None) => ConnEvent {
                    slot,
                    kind: ConnEventKind::Closed,
                },
                Err(_) => ConnEvent {
                    slot,
                    kind: ConnEventKind::Closed,
                },
            };
            let is_closed = matches!(event.kind, ConnEventKind::Closed);
            if events_tx.send(event).await.is_err() || is_closed {
                break;
            }
        }
    });
}

async fn handle_conn_event(
    db: &mut Database,
    logging: &LoggingHandle,
    table: &mut ConnTable,
    event: ConnEvent,
) {
    match event.kind {
        ConnEventKind::Closed => {
            table[event.slot] = None;
        }
        ConnEventKind::Line(text) => {
            // EXIT/LOG are never reachable here: `dispatch_line` rejects
            // them before `execute` runs for any non-local channel.
            let reply = match dispatch_line(db, logging, &text, false) {
                DispatchOutcome::Reply(reply) => reply,
                DispatchOutcome::Shutdown(reply) => reply,
            };
            if let Some(writer) = table[event.slot].as_mut() {
                if writer.write_all(reply.as_bytes()).await.is_err() {
                    table[event.slot] = None;
                }
            }
        }
    }
}
