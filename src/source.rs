use std::io;

/// Result of one bounded read from a [`ByteSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Read {
    /// Number of bytes written to the front of the buffer.
    pub amount: usize,
    /// The source has no more bytes. Can come together with `amount > 0`.
    pub ended: bool,
}

impl Read {
    pub const fn bytes(amount: usize) -> Self {
        Read {
            amount,
            ended: false,
        }
    }

    pub const fn ended(amount: usize) -> Self {
        Read {
            amount,
            ended: true,
        }
    }
}

/// Something to read request bytes from, typically a socket.
///
/// A read may fill less than the buffer, or nothing at all without being
/// ended. End of stream is reported through [`Read::ended`], distinct from
/// errors. Closing the source is up to whoever owns it.
pub trait ByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Read>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Read> {
        (**self).read(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Read> {
        (**self).read(buf)
    }
}

/// Adapts an [`io::Read`] to a [`ByteSource`].
///
/// `Ok(0)` is end of stream. `Interrupted` and `WouldBlock` become empty,
/// non-ended reads and the caller simply tries again.
#[derive(Debug)]
pub struct IoSource<R>(R);

impl<R: io::Read> IoSource<R> {
    pub fn new(reader: R) -> Self {
        IoSource(reader)
    }

    pub fn get_ref(&self) -> &R {
        &self.0
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: io::Read> ByteSource for IoSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Read> {
        // io::Read can't tell end of stream from an empty buffer.
        if buf.is_empty() {
            return Ok(Read::bytes(0));
        }

        match self.0.read(buf) {
            Ok(0) => Ok(Read::ended(0)),
            Ok(n) => Ok(Read::bytes(n)),
            Err(e)
                if e.kind() == io::ErrorKind::Interrupted
                    || e.kind() == io::ErrorKind::WouldBlock =>
            {
                Ok(Read::bytes(0))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn io_source_end() -> io::Result<()> {
        let mut s = IoSource::new(Cursor::new(b"abc".to_vec()));
        let mut buf = [0; 2];

        assert_eq!(s.read(&mut buf)?, Read::bytes(2));
        assert_eq!(&buf, b"ab");
        assert_eq!(s.read(&mut buf)?, Read::bytes(1));
        assert_eq!(s.read(&mut buf)?, Read::ended(0));

        Ok(())
    }

    #[test]
    fn io_source_empty_buffer_is_not_end() -> io::Result<()> {
        let mut s = IoSource::new(Cursor::new(b"abc".to_vec()));
        assert_eq!(s.read(&mut [])?, Read::bytes(0));
        Ok(())
    }

    struct Flaky(Vec<io::ErrorKind>);

    impl io::Read for Flaky {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            match self.0.pop() {
                Some(kind) => Err(kind.into()),
                None => Ok(0),
            }
        }
    }

    #[test]
    fn io_source_retryable_errors() -> io::Result<()> {
        let mut s = IoSource::new(Flaky(vec![
            io::ErrorKind::WouldBlock,
            io::ErrorKind::Interrupted,
        ]));
        let mut buf = [0; 4];

        assert_eq!(s.read(&mut buf)?, Read::bytes(0));
        assert_eq!(s.read(&mut buf)?, Read::bytes(0));
        assert_eq!(s.read(&mut buf)?, Read::ended(0));

        Ok(())
    }

    #[test]
    fn io_source_other_errors() {
        let mut s = IoSource::new(Flaky(vec![io::ErrorKind::ConnectionReset]));

        let e = s.read(&mut [0; 4]).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::ConnectionReset);
    }
}
