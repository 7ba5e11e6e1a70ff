//! Reads the request line of incoming connections and reports it.

#[macro_use]
extern crate log;

use std::io;

use reqline::{CancelHandle, IoSource, LineReader, RequestLine};

mod error;
pub use error::Error;

pub mod server;

const OK: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
const BAD_REQUEST: &[u8] =
    b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

/// Read one request line from `i` and answer on `o`.
///
/// Malformed request lines are answered with a 400 before the error is
/// returned. Anything after the request line is left unread.
pub fn serve_single(
    i: impl io::Read,
    mut o: impl io::Write,
    cancel: &CancelHandle,
) -> Result<RequestLine, Error> {
    let mut reader = LineReader::new(IoSource::new(i)).with_cancel(cancel.clone());

    let line = match reader.read_line() {
        Ok(v) => v,
        Err(e) if e.is_protocol() => {
            debug!("Bad request: {}", e);
            // The peer might already be gone.
            if let Err(w) = o.write_all(BAD_REQUEST).and_then(|_| o.flush()) {
                debug!("Failed to answer bad request: {}", w);
            }
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    trace!("{} bytes of headers buffered", reader.remaining().len());

    o.write_all(OK)?;
    o.flush()?;

    Ok(line)
}

/// Human readable form of a request line, as printed by the listener.
pub fn report(line: &RequestLine) -> String {
    format!(
        "Request line:\n- Method: {}\n- Target: {}\n- Version: {}\n",
        line.method(),
        line.target(),
        line.http_version()
    )
}
