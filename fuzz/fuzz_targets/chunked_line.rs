#![no_main]

use std::io;

use libfuzzer_sys::fuzz_target;
use reqline::{parse_request_line, ByteSource, Config, Error, LineReader, Read};

/// First byte picks the chunk size, the rest is the input.
struct Chunked<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl ByteSource for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Read> {
        if self.data.is_empty() {
            return Ok(Read::ended(0));
        }
        let n = self.data.len().min(self.chunk).min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(Read::bytes(n))
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((first, input)) = data.split_first() else {
        return;
    };
    let chunk = (*first as usize % 16) + 1;

    let whole = parse_request_line(input);

    // Large enough that the limit never applies to fuzz input.
    let config = Config::new().max_line_len(input.len());
    let source = Chunked { data: input, chunk };
    let chunked = LineReader::with_config(source, config).read_line();

    match (whole, chunked) {
        (Ok(a), Ok(line)) => {
            assert!(a.is_success());
            assert_eq!(a.line(), Some(&line));
        }
        (Ok(a), Err(Error::IncompleteRequest)) => assert!(!a.is_success()),
        (Err(Error::Malformed(a)), Err(Error::Malformed(b))) => assert_eq!(a, b),
        (Err(Error::UnsupportedVersion(a)), Err(Error::UnsupportedVersion(b))) => {
            assert_eq!(a, b)
        }
        (a, b) => panic!("whole {:?} differs from chunked {:?}", a, b),
    }
});
