use std::process::ExitCode;

use clap::Parser;
use roster_db::Database;
use roster_server::cli::Options;
use roster_server::Dispatcher;
use roster_util::{init_logging, Shutdown};
use tokio::io::{stdin, stdout, BufReader};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let opts = Options::parse();
    let logging = init_logging(opts.log_level);

    let db = match opts.max_size {
        Some(max_size) => Database::create_with_max_size(max_size),
        None => Database::create(),
    };
    let db = match db {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "failed to create database");
            return ExitCode::FAILURE;
        }
    };

    let address = opts.bind_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%address, error = %e, "failed to bind listening socket");
            return ExitCode::FAILURE;
        }
    };
    info!(%address, max_conns = opts.max_conns, "listening");

    let dispatcher = Dispatcher::new(db, logging, opts.max_conns);
    let shutdown = Shutdown::new();

    match dispatcher
        .run(listener, BufReader::new(stdin()), stdout(), shutdown)
        .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "dispatcher loop exited with an error");
            ExitCode::FAILURE
        }
    }
}
