//! Knobs for a single fetch. Everything is set in code; the client reads no
//! files and no flags.
use crate::protocol::LineEnding;

pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

/// What to do with a url that had an `https://` prefix.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HttpsPolicy {
    /// Refuse to connect.
    Reject,
    /// Connect in plaintext to the parsed port.
    Downgrade,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ClientConfig {
    read_buffer_size: usize,
    line_ending: LineEnding,
    https_policy: HttpsPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            line_ending: LineEnding::default(),
            https_policy: HttpsPolicy::Reject,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on the bytes taken by one read. Zero is bumped to one.
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size.max(1);
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_https_policy(mut self, policy: HttpsPolicy) -> Self {
        self.https_policy = policy;
        self
    }

    pub fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn https_policy(&self) -> HttpsPolicy {
        self.https_policy
    }
}
