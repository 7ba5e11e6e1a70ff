use crate::line::RequestLine;
use crate::parser::{find_crlf, parse_request_line};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// No request line yet. Feed more input.
    Pending,
    /// A request line was read. Terminal.
    Done,
    /// The input can't become a request line. Terminal.
    Failed,
}

/// One attempt at reading a single request line.
///
/// The session is what remembers whether a line was produced. The parser
/// itself is stateless.
#[derive(Debug)]
pub struct Session {
    state: ParseState,
    line: Option<RequestLine>,
    max_line_len: usize,
}

impl Session {
    pub fn new(max_line_len: usize) -> Self {
        Session {
            state: ParseState::Pending,
            line: None,
            max_line_len,
        }
    }

    /// Try to complete the session from `input`, all bytes buffered so far.
    ///
    /// Returns how many bytes from the front of `input` were used, 0 meaning
    /// more input is needed. Calling this on a `Done` session is a bug in the
    /// caller and gives [`Error::AlreadyDone`]. Any parse error fails the
    /// session, later calls give [`Error::Aborted`].
    pub fn try_parse(&mut self, input: &[u8]) -> Result<usize> {
        self.ensure_pending()?;

        match self.do_try_parse(input) {
            Ok(input_used) => Ok(input_used),
            Err(e) => {
                self.state = ParseState::Failed;
                Err(e)
            }
        }
    }

    fn do_try_parse(&mut self, input: &[u8]) -> Result<usize> {
        // Length goes before any field check.
        let Some(line_len) = find_crlf(input) else {
            // All of input is line. The +1 allows for a trailing \r still
            // waiting for its \n.
            if input.len() > self.max_line_len.saturating_add(1) {
                return Err(Error::LineTooLong(self.max_line_len));
            }
            trace!("Partial request line: {} bytes", input.len());
            return Ok(0);
        };

        if line_len > self.max_line_len {
            return Err(Error::LineTooLong(self.max_line_len));
        }

        let attempt = parse_request_line(input)?;
        let input_used = attempt.input_used();

        self.line = attempt.into_line();
        self.state = ParseState::Done;

        Ok(input_used)
    }

    /// Error unless the session can still take input.
    pub(crate) fn ensure_pending(&self) -> Result<()> {
        match self.state {
            ParseState::Pending => Ok(()),
            ParseState::Done => Err(Error::AlreadyDone),
            ParseState::Failed => Err(Error::Aborted),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParseState::Done
    }

    pub fn line(&self) -> Option<&RequestLine> {
        self.line.as_ref()
    }

    pub fn into_line(self) -> Option<RequestLine> {
        self.line
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pending_then_done() -> Result<()> {
        let mut s = Session::new(100);
        assert_eq!(s.state(), ParseState::Pending);

        assert_eq!(s.try_parse(b"GET /foo HTT")?, 0);
        assert_eq!(s.state(), ParseState::Pending);
        assert!(s.line().is_none());

        assert_eq!(s.try_parse(b"GET /foo HTTP/1.1\r\nHost")?, 19);
        assert!(s.is_done());

        let line = s.into_line().unwrap();
        assert_eq!(line.target(), "/foo");

        Ok(())
    }

    #[test]
    fn parse_after_done() -> Result<()> {
        let mut s = Session::new(100);
        s.try_parse(b"GET / HTTP/1.1\r\n")?;

        let r = s.try_parse(b"GET / HTTP/1.1\r\n");
        assert!(matches!(r, Err(Error::AlreadyDone)));

        // The first line survives.
        assert_eq!(s.line().unwrap().method(), "GET");

        Ok(())
    }

    #[test]
    fn error_fails_session() {
        let mut s = Session::new(100);

        let r = s.try_parse(b"get / HTTP/1.1\r\n");
        assert!(matches!(r, Err(Error::Malformed(_))));
        assert_eq!(s.state(), ParseState::Failed);
        assert!(s.line().is_none());

        // Even a good line is refused now.
        let r = s.try_parse(b"GET / HTTP/1.1\r\n");
        assert!(matches!(r, Err(Error::Aborted)));
    }

    #[test]
    fn line_at_limit() -> Result<()> {
        // "GET /abc HTTP/1.1" is 17 bytes.
        let mut s = Session::new(17);

        assert_eq!(s.try_parse(b"GET /abc HTTP/1.1\r")?, 0);
        assert_eq!(s.try_parse(b"GET /abc HTTP/1.1\r\n")?, 19);

        Ok(())
    }

    #[test]
    fn complete_line_over_limit() {
        let mut s = Session::new(16);

        let r = s.try_parse(b"GET /abc HTTP/1.1\r\n");
        assert!(matches!(r, Err(Error::LineTooLong(16))));
    }

    #[test]
    fn partial_line_over_limit() -> Result<()> {
        let mut s = Session::new(16);

        // 17 bytes could still be 16 + \r.
        assert_eq!(s.try_parse(b"GET /abc HTTP/1.")?, 0);
        assert_eq!(s.try_parse(b"GET /abc HTTP/1.1")?, 0);

        let r = s.try_parse(b"GET /abc HTTP/1.1\r");
        assert!(matches!(r, Err(Error::LineTooLong(16))));

        Ok(())
    }

    #[test]
    fn length_checked_before_fields() {
        let mut s = Session::new(10);

        // Malformed, but too long is what counts.
        let r = s.try_parse(b"get /abcdef HTTP/1.1\r\n");
        assert!(matches!(r, Err(Error::LineTooLong(10))));
    }

    #[test]
    fn no_limit() -> Result<()> {
        let mut s = Session::new(usize::MAX);

        assert_eq!(s.try_parse(b"GET /a HT")?, 0);
        assert_eq!(s.try_parse(b"GET /a HTTP/1.1\r\n")?, 17);

        Ok(())
    }
}
