use std::io;

use crate::source::{ByteSource, Read};

/// Input buffer that grows by doubling and shifts out consumed bytes.
///
/// `buffer[..filled]` holds bytes read but not yet consumed. The rest is free
/// space for the next read.
pub(crate) struct LineBuffer {
    buffer: Vec<u8>,
    filled: usize,
}

impl LineBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        LineBuffer {
            buffer: vec![0; capacity.max(1)],
            filled: 0,
        }
    }

    /// Read once from `source` into the free region.
    pub fn fill_more(&mut self, source: &mut impl ByteSource) -> io::Result<Read> {
        if self.filled == self.buffer.len() {
            let cap = self.buffer.len() * 2;
            trace!("Grow buffer: {} -> {}", self.buffer.len(), cap);
            self.buffer.resize(cap, 0);
        }

        let free = self.buffer.len() - self.filled;
        let read = source.read(&mut self.buffer[self.filled..])?;

        // Capped at the free space offered to the source.
        let amount = read.amount.min(free);
        self.filled += amount;

        trace!(
            "Read {} bytes (ended: {}), buffer {}/{}",
            amount,
            read.ended,
            self.filled,
            self.capacity()
        );

        Ok(Read {
            amount,
            ended: read.ended,
        })
    }

    /// Discard `amount` bytes from the front.
    pub fn consume(&mut self, amount: usize) {
        let max = amount.min(self.filled);
        self.buffer.copy_within(max..self.filled, 0);
        self.filled -= max;
    }

    pub fn filled(&self) -> &[u8] {
        &self.buffer[..self.filled]
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn into_filled(mut self) -> Vec<u8> {
        self.buffer.truncate(self.filled);
        self.buffer
    }
}
