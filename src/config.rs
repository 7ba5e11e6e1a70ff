const DEFAULT_INITIAL_CAPACITY: usize = 8;
const DEFAULT_MAX_LINE_LEN: usize = 8192;

/// Tuning for a [`LineReader`](crate::LineReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) initial_capacity: usize,
    pub(crate) max_line_len: usize,
}

impl Config {
    pub fn new() -> Self {
        Config {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }

    /// Size of the read buffer before the first read. It doubles when full.
    ///
    /// A zero capacity is raised to 1.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity.max(1);
        self
    }

    /// Longest request line accepted, not counting the CRLF.
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.max_line_len = len;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
