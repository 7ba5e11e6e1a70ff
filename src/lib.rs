//! Incremental http 1.1 request line reader.
//!
//! Bytes can arrive in any chunking, one byte at a time or many lines at
//! once. The reader buffers them until a full `METHOD TARGET HTTP/1.1\r\n`
//! line is there, validates it, and keeps whatever came after the line for
//! the next stage (headers).
//!
//! ```
//! use reqline::{IoSource, LineReader};
//!
//! let input = &b"GET /coffee HTTP/1.1\r\nHost: x\r\n\r\n"[..];
//!
//! let mut reader = LineReader::new(IoSource::new(input));
//! let line = reader.read_line()?;
//!
//! assert_eq!(line.method(), "GET");
//! assert_eq!(line.target(), "/coffee");
//! assert_eq!(line.http_version(), "1.1");
//!
//! // The rest is left for parsing headers.
//! let (_, rest) = reader.into_parts();
//! assert!(b"Host: x\r\n\r\n".starts_with(&rest));
//! # Ok::<_, reqline::Error>(())
//! ```
//!
//! The building blocks are public too. [`parse_request_line`] is a pure
//! function over the bytes buffered so far, and [`Session`] holds the state
//! of one attempt at reading a line.

#[macro_use]
extern crate log;

#[cfg(feature = "http_crate")]
pub use http;

mod error;
pub use error::{Error, Malformed};
pub(crate) use error::Result;

mod config;
pub use config::Config;

mod line;
pub use line::RequestLine;

mod parser;
pub use parser::{parse_request_line, LineAttempt};

mod session;
pub use session::{ParseState, Session};

mod source;
pub use source::{ByteSource, IoSource, Read};

mod buffer;

mod reader;
pub use reader::{read_request_line, CancelHandle, LineReader};

#[cfg(test)]
mod test;
