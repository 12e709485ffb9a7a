//! The interactive client (specification §4.7): dials the server, then loops
//! reading one line from the terminal (with editing and history via
//! `rustyline`), sending it, and printing the synchronous reply.

mod cli;

use std::io::{Read, Write};
use std::net::TcpStream;
use std::process::ExitCode;

use clap::Parser;
use cli::Options;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{error, info};

/// Canonical TCP port, mirrored from `roster-server` so the client needs no
/// dependency on the server binary crate.
pub const DEFAULT_PORT: u16 = 16166;

/// Reply buffer size; large enough that a single `recv` never straddles two
/// `GET *` records (specification §6).
const BUFSIZ: usize = 8192;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let opts = Options::parse();
    let address = opts.server_address();

    let mut stream = match TcpStream::connect(&address) {
        Ok(stream) => stream,
        Err(e) => {
            error!(%address, error = %e, "failed to connect");
            return ExitCode::FAILURE;
        }
    };
    info!(%address, "connected");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("failed to start the line editor: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("connected to {address}");

    loop {
        let line = match editor.readline("roster> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(e) => {
                eprintln!("readline error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        let mut buf = line.into_bytes();
        if buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }

        if let Err(e) = stream.write_all(&buf) {
            eprintln!("failed to send request: {e}");
            return ExitCode::FAILURE;
        }

        let mut reply = vec![0u8; BUFSIZ];
        let n = match stream.read(&mut reply) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("failed to receive reply: {e}");
                return ExitCode::FAILURE;
            }
        };
        if n == 0 {
            println!("server closed the connection");
            return ExitCode::SUCCESS;
        }
        print!("{}", String::from_utf8_lossy(&reply[..n]));
    }

    ExitCode::SUCCESS
}
