//! Bounded per-session message history.
//!
//! The server keeps the last few exchanged messages for diagnostics. The
//! buffer is a FIFO with a hard capacity; pushing into a full history
//! silently evicts the oldest record.

use std::collections::VecDeque;
use std::time::SystemTime;

/// One received message, kept in both its wire and decrypted form.
#[derive(Debug, Clone)]
pub struct MessageRecord {
    /// Ciphertext exactly as received.
    pub ciphertext: Vec<u8>,

    /// Decrypted bytes (not necessarily valid UTF-8).
    pub plaintext: Vec<u8>,

    /// When the message arrived.
    pub received_at: SystemTime,
}

impl MessageRecord {
    /// Record a message received now.
    #[must_use]
    pub fn new(ciphertext: Vec<u8>, plaintext: Vec<u8>) -> Self {
        Self { ciphertext, plaintext, received_at: SystemTime::now() }
    }
}

/// Bounded FIFO of recent messages.
#[derive(Debug)]
pub struct History {
    records: VecDeque<MessageRecord>,
    capacity: usize,
}

impl History {
    /// Default capacity used by the server (last 10 messages).
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create an empty history bounded to `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { records: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append a record, evicting the oldest one if the history is full.
    pub fn push(&mut self, record: MessageRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &MessageRecord> {
        self.records.iter()
    }
}
