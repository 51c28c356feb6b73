//! Shared message log primitives for the headless driver and future UIs.
use std::collections::VecDeque;

/// Severity level for player-facing messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Sequence number of the session operation that produced the entry.
    pub sequence: Option<u64>,
    /// Label of the store action behind the entry (`"add_to_cart"`, ...).
    /// `None` for navigation and system notices.
    pub action: Option<&'static str>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, sequence: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            sequence,
            action: None,
            level,
        }
    }

    /// Entry describing the outcome of store action number `sequence`.
    pub fn for_action(
        action: &'static str,
        sequence: u64,
        text: impl Into<String>,
        level: MessageLevel,
    ) -> Self {
        Self {
            action: Some(action),
            ..Self::new(text, Some(sequence), level)
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.action.is_some() && self.level != MessageLevel::Info
    }
}

/// Circular buffer of messages displayed to the player.
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
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    /// Most recent entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries recorded for a given store action, oldest first.
    pub fn for_action<'a>(&'a self, action: &'a str) -> impl Iterator<Item = &'a MessageEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.action == Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_entry_when_full() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<&str> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
        assert_eq!(log.recent(1).next().unwrap().text, "three");
    }

    #[test]
    fn filters_entries_by_action() {
        let mut log = MessageLog::new(8);
        log.push(MessageEntry::for_action("add_to_cart", 1, "added", MessageLevel::Info));
        log.push_text("Entered Stockroom");
        log.push(MessageEntry::for_action(
            "add_to_cart",
            2,
            "cart is full",
            MessageLevel::Warning,
        ));
        log.push(MessageEntry::for_action("add_currency", 3, "earned", MessageLevel::Info));

        let adds: Vec<&MessageEntry> = log.for_action("add_to_cart").collect();
        assert_eq!(adds.len(), 2);
        assert_eq!(adds[1].sequence, Some(2));
        assert!(adds[1].is_rejection());
        assert!(!adds[0].is_rejection());
        assert_eq!(log.iter().filter(|entry| entry.action.is_none()).count(), 1);
    }

    #[test]
    fn capacity_is_at_least_one() {
        let mut log = MessageLog::new(0);
        log.push_text("kept");
        log.push_text("replaced");

        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().unwrap().text, "replaced");
    }
}
