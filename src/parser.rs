use core::str;

use crate::error::Malformed;
use crate::line::RequestLine;
use crate::{Error, Result};

const VERSION_PREFIX: &str = "HTTP/";
const SUPPORTED_VERSION: &str = "1.1";

/// Outcome of one attempt at parsing a request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAttempt {
    input_used: usize,
    line: Option<RequestLine>,
}

impl LineAttempt {
    const fn empty() -> Self {
        LineAttempt {
            input_used: 0,
            line: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.input_used > 0
    }

    /// Bytes to discard from the front of the input, including the CRLF.
    pub fn input_used(&self) -> usize {
        self.input_used
    }

    pub fn line(&self) -> Option<&RequestLine> {
        self.line.as_ref()
    }

    pub fn into_line(self) -> Option<RequestLine> {
        self.line
    }
}

/// Try to parse a request line from the start of `input`.
///
/// Without a `\r\n` in the input this is not an error, the returned attempt
/// is simply not a success. The function holds no state, calling it again
/// with more input is always fine.
pub fn parse_request_line(input: &[u8]) -> Result<LineAttempt> {
    let Some(idx) = find_crlf(input) else {
        return Ok(LineAttempt::empty());
    };

    let line = &input[..idx];

    let parts: Vec<&[u8]> = line
        .split(|c| c.is_ascii_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    let &[method, target, version] = &parts[..] else {
        return Err(Malformed::FieldCount(parts.len()).into());
    };

    let method = as_str(method)?;
    let target = as_str(target)?;
    let version = as_str(version)?;

    // Upper-casing a lower-case method changes it.
    if method != method.to_uppercase() {
        return Err(Malformed::Method.into());
    }

    if !target.starts_with('/') {
        return Err(Malformed::Target.into());
    }

    let Some(version) = version.strip_prefix(VERSION_PREFIX) else {
        return Err(Malformed::VersionPrefix.into());
    };

    if version != SUPPORTED_VERSION {
        return Err(Error::UnsupportedVersion(version.to_string()));
    }

    trace!("Parsed request line: {} {} HTTP/{}", method, target, version);

    Ok(LineAttempt {
        input_used: idx + 2,
        line: Some(RequestLine::new(method, target, version)),
    })
}

fn as_str(b: &[u8]) -> Result<&str> {
    str::from_utf8(b).map_err(|_| Malformed::NotUtf8.into())
}

/// Position of the first `\r\n` in `b`.
pub(crate) fn find_crlf(b: &[u8]) -> Option<usize> {
    b.windows(2).position(|w| w == b"\r\n")
}
