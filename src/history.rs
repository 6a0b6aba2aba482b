// history.rs

use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded log of submitted lines. Once full, recording a line drops the
/// oldest one.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl History {
    /// A capacity of zero is bumped to one so the last line is always kept.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, line: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
    }

    /// Entries oldest first, numbered from 1.
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.as_str()))
    }

    pub fn get(&self, n: usize) -> Option<&str> {
        self.entries.get(n).map(String::as_str)
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
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
