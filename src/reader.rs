use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::buffer::LineBuffer;
use crate::line::RequestLine;
use crate::session::Session;
use crate::source::ByteSource;
use crate::{Config, Error, Result};

/// Read a single request line from `source` with the default [`Config`].
///
/// Bytes read past the line are dropped with the reader. Use [`LineReader`]
/// to keep them for parsing headers.
pub fn read_request_line<S: ByteSource>(source: S) -> Result<RequestLine> {
    LineReader::new(source).read_line()
}

/// Drives a [`Session`] by reading from a [`ByteSource`] until a request line
/// is complete.
pub struct LineReader<S> {
    source: S,
    buffer: LineBuffer,
    session: Session,
    cancel: CancelHandle,
}

impl<S: ByteSource> LineReader<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, Config::default())
    }

    pub fn with_config(source: S, config: Config) -> Self {
        LineReader {
            source,
            buffer: LineBuffer::with_capacity(config.initial_capacity),
            session: Session::new(config.max_line_len),
            cancel: CancelHandle::default(),
        }
    }

    /// Read until a complete request line is available.
    ///
    /// This only works once per reader, a second call gives
    /// [`Error::AlreadyDone`], or [`Error::Aborted`] if the first one hit a
    /// bad request line.
    pub fn read_line(&mut self) -> Result<RequestLine> {
        self.session.ensure_pending()?;

        loop {
            if self.cancel.is_cancelled() {
                debug!("Read cancelled with {} bytes buffered", self.buffer.filled().len());
                return Err(Error::Cancelled);
            }

            let read = self.buffer.fill_more(&mut self.source)?;

            if read.amount > 0 {
                let input_used = self.session.try_parse(self.buffer.filled())?;

                if input_used > 0 {
                    self.buffer.consume(input_used);
                    debug!("Read request line, {} bytes used", input_used);
                }
            }

            if let Some(line) = self.session.line() {
                return Ok(line.clone());
            }

            if read.ended {
                debug!(
                    "Input ended before request line, {} bytes buffered",
                    self.buffer.filled().len()
                );
                return Err(Error::IncompleteRequest);
            }
        }
    }

    /// Bytes read past the request line. These belong to the headers.
    pub fn remaining(&self) -> &[u8] {
        self.buffer.filled()
    }

    /// Handle to stop this reader from another thread at the next read.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Use a shared handle, to cancel many readers at once.
    pub fn with_cancel(mut self, handle: CancelHandle) -> Self {
        self.cancel = handle;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give back the source together with the bytes read past the line.
    pub fn into_parts(self) -> (S, Vec<u8>) {
        (self.source, self.buffer.into_filled())
    }
}

/// Cancels a [`LineReader`] the next time it is about to read.
///
/// Bytes already buffered are not parsed after cancelling.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
