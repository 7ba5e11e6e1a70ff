#[macro_use]
extern crate log;

use std::env;
use std::io::{self, Write};

use reqline::CancelHandle;
use reqlisten::server::{serve, tcp::TcpAcceptor};
use reqlisten::{report, Error};

const DEFAULT_ADDR: &str = "127.0.0.1:42069";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let addr = env::args()
        .nth(1)
        .or_else(|| env::var("REQLISTEN_ADDR").ok())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());

    let acceptor = TcpAcceptor::bind(&addr)?;
    info!("Listening for TCP traffic on {}", acceptor.local_addr()?);

    serve(acceptor, CancelHandle::default(), |line| {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(report(line).as_bytes()) {
            warn!("Failed to print request line: {}", e);
        }
    })?;

    Ok(())
}
