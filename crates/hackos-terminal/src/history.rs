//! Command history with arrow-key recall

use std::collections::VecDeque;

/// Outcome of stepping the recall cursor towards newer entries
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall {
    /// Cursor moved; replace the input with this entry
    Entry(String),
    /// Cursor moved below the newest entry; clear the input
    Cleared,
    /// Cursor did not move
    Unchanged,
}

/// Bounded command history, most recent last
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
    /// Offset back from the newest entry (0 = newest), None when not recalling
    cursor: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            cursor: None,
        }
    }

    /// Record a submitted command
    ///
    /// Empty commands and repeats of the most recent entry are ignored.
    /// Returns whether the entry was stored.
    pub fn push(&mut self, command: &str) -> bool {
        if command.is_empty() || self.entries.back().is_some_and(|last| last == command) {
            return false;
        }
        self.entries.push_back(command.to_string());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        true
    }

    /// Forget the recall position
    #[inline]
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Step back to an older entry (ArrowUp)
    ///
    /// Returns None, leaving the cursor alone, when already at the oldest.
    pub fn older(&mut self) -> Option<&str> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        self.entry_at(next)
    }

    /// Step forward to a newer entry (ArrowDown)
    pub fn newer(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Unchanged,
            Some(0) => {
                self.cursor = None;
                Recall::Cleared
            }
            Some(c) => {
                self.cursor = Some(c - 1);
                self.entry_at(c - 1)
                    .map(|e| Recall::Entry(e.to_string()))
                    .unwrap_or(Recall::Cleared)
            }
        }
    }

    fn entry_at(&self, offset: usize) -> Option<&str> {
        let index = self.entries.len().checked_sub(offset + 1)?;
        self.entries.get(index).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
