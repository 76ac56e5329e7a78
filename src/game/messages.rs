//! # Message Log
//!
//! Player-facing notifications. The simulation only ever writes here; the
//! front end reads messages back one at a time.

use crate::config::MAX_MESSAGE_BUFFER;
use std::collections::VecDeque;

/// Bounded FIFO of unread messages plus a history of recent ones.
///
/// When the unread buffer is full the next `push` forces it out as a batch
/// that still has to be read. Nothing pushed is lost before the front end
/// reads it: `pop` and `flush` deliver the forced batches first.
///
/// # Examples
///
/// ```
/// use delve::MessageLog;
///
/// let mut log = MessageLog::with_capacity(2);
/// log.push("one");
/// log.push("two");
/// log.push("three");
///
/// assert_eq!(log.pop().as_deref(), Some("one"));
/// assert_eq!(log.flush(), vec!["two".to_string(), "three".to_string()]);
/// assert_eq!(log.history().collect::<Vec<_>>(), vec!["two", "three"]);
/// ```
#[derive(Debug, Clone)]
pub struct MessageLog {
    capacity: usize,
    unread: VecDeque<String>,
    /// Batches pushed out of a full buffer, waiting to be read.
    forced: VecDeque<String>,
    history: VecDeque<String>,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self::with_capacity(MAX_MESSAGE_BUFFER)
    }

    /// A log holding `capacity` unread messages. A capacity of zero is
    /// treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            unread: VecDeque::with_capacity(capacity),
            forced: VecDeque::new(),
            history: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.unread.len() >= self.capacity {
            log::debug!("Message buffer full, forcing out {} unread", self.unread.len());
            self.forced.extend(self.unread.drain(..));
        }

        if self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(message.clone());
        self.unread.push_back(message);
    }

    /// Oldest unread message.
    pub fn pop(&mut self) -> Option<String> {
        self.forced.pop_front().or_else(|| self.unread.pop_front())
    }

    /// Oldest unread message, left in place.
    pub fn peek(&self) -> Option<&str> {
        self.forced
            .front()
            .or_else(|| self.unread.front())
            .map(String::as_str)
    }

    /// Drains every unread message in arrival order.
    pub fn flush(&mut self) -> Vec<String> {
        self.forced.drain(..).chain(self.unread.drain(..)).collect()
    }

    /// The most recent messages, read or not, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn unread_count(&self) -> usize {
        self.forced.len() + self.unread.len()
    }

    /// Marks everything read without touching the history.
    pub fn clear(&mut self) {
        self.forced.clear();
        self.unread.clear();
    }
}
