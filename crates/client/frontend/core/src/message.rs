//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Severity level for UI messages produced from telemetry events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    pub timestamp: Option<DateTime<Local>>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(
        text: impl Into<String>,
        timestamp: Option<DateTime<Local>>,
        level: MessageLevel,
    ) -> Self {
        Self {
            text: text.into(),
            timestamp,
            level,
        }
    }

    /// Entry stamped with the current local time.
    pub fn now(text: impl Into<String>, level: MessageLevel) -> Self {
        Self::new(text, Some(Local::now()), level)
    }
}

/// Circular buffer of messages displayed to the user.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::now(message, MessageLevel::Info));
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_evicts_oldest() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<_> = log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut log = MessageLog::new(8);
        log.push_text("old");
        log.push_text("new");

        let texts: Vec<_> = log.recent(1).map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["new"]);
    }
}
