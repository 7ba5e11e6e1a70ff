use std::collections::VecDeque;
use std::io;

use crate::source::{ByteSource, Read};


/// Hands out `data` in chunks of at most `chunk` bytes, then ends.
pub struct ChunkSource {
    data: Vec<u8>,
    chunk: usize,
    pos: usize,
    end_with_last: bool,
    reads: usize,
}

impl ChunkSource {
    pub fn new(data: &[u8], chunk: usize) -> Self {
        assert!(chunk > 0, "chunk size must be positive");
        ChunkSource {
            data: data.to_vec(),
            chunk,
            pos: 0,
            end_with_last: false,
            reads: 0,
        }
    }

    /// Report end of stream together with the last bytes, instead of in a
    /// separate empty read.
    pub fn end_with_last(mut self) -> Self {
        self.end_with_last = true;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ByteSource for ChunkSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Read> {
        self.reads += 1;

        let left = self.data.len() - self.pos;
        if left == 0 {
            return Ok(Read::ended(0));
        }

        let n = left.min(self.chunk).min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;

        if self.end_with_last && self.pos == self.data.len() {
            Ok(Read::ended(n))
        } else {
            Ok(Read::bytes(n))
        }
    }
}

pub enum Step {
    Bytes(&'static [u8]),
    /// Nothing available right now, but not ended.
    Empty,
    Ended(&'static [u8]),
    Fail(io::ErrorKind),
}

/// Plays back a fixed sequence of reads. Running out of steps is an end.
pub struct ScriptSource {
    steps: VecDeque<Step>,
}

impl ScriptSource {
    pub fn new(steps: Vec<Step>) -> Self {
        ScriptSource {
            steps: steps.into(),
        }
    }

    pub fn steps_left(&self) -> usize {
        self.steps.len()
    }
}

impl ByteSource for ScriptSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<Read> {
        let Some(step) = self.steps.pop_front() else {
            return Ok(Read::ended(0));
        };

        let (bytes, ended) = match step {
            Step::Bytes(b) => (b, false),
            Step::Empty => return Ok(Read::bytes(0)),
            Step::Ended(b) => (b, true),
            Step::Fail(kind) => return Err(kind.into()),
        };

        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);

        if n < bytes.len() {
            // Put back what didn't fit.
            let rest = &bytes[n..];
            let step = if ended {
                Step::Ended(rest)
            } else {
                Step::Bytes(rest)
            };
            self.steps.push_front(step);
            return Ok(Read::bytes(n));
        }

        Ok(Read { amount: n, ended })
    }
}
