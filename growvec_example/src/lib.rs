#![allow(unused)]
#![allow(dead_code)]
//! Example consumers of the `growvec` container.

use growvec::prelude::*;

/// A descending leaderboard that keeps at most `limit` scores, built on
/// [`GrowVec<u32>`].
///
/// Demonstrates capacity reservation, positional insertion, and tail
/// trimming without ever reallocating after construction.
pub struct Leaderboard {
    scores: GrowVec<u32>,
    limit: usize,
}

impl Leaderboard {
    /// A board that will hold at most `limit` scores.
    pub fn new(limit: usize) -> Self {
        Leaderboard {
            // One spare slot so a full board can accept the incoming score
            // before the lowest is trimmed.
            scores: GrowVec::with_capacity(limit + 1),
            limit,
        }
    }

    /// Records `score` at its sorted position, trimming the lowest score
    /// when the board overflows.
    pub fn record(&mut self, score: u32) {
        let at = self
            .scores
            .iter()
            .position(|&s| s < score)
            .unwrap_or(self.scores.len());
        self.scores.insert(at, score);
        while self.scores.len() > self.limit {
            self.scores.pop_back();
        }
    }

    /// The highest score, if any.
    pub fn top(&self) -> Option<u32> {
        self.scores.at(0).ok().copied()
    }

    /// All scores, highest first.
    pub fn scores(&self) -> impl Iterator<Item = &u32> {
        self.scores.iter()
    }
}

/// An edit buffer with undo, built on two [`GrowVec`]s.
///
/// Demonstrates `take`, cloning, and equality.
pub struct UndoBuffer {
    current: GrowVec<u8>,
    saved: GrowVec<u8>,
}

impl UndoBuffer {
    /// An empty buffer with an empty undo slot.
    pub fn new() -> Self {
        UndoBuffer {
            current: GrowVec::new(),
            saved: GrowVec::new(),
        }
    }

    /// Snapshots the current contents as the undo point.
    pub fn checkpoint(&mut self) {
        self.saved = self.current.clone();
    }

    /// Appends a byte.
    pub fn write(&mut self, byte: u8) {
        self.current.push(byte);
    }

    /// Restores the last checkpoint, returning what was discarded.
    pub fn undo(&mut self) -> GrowVec<u8> {
        let discarded = self.current.take();
        self.current = self.saved.clone();
        discarded
    }

    /// Whether anything changed since the last checkpoint.
    pub fn is_dirty(&self) -> bool {
        self.current != self.saved
    }

    /// The live contents.
    pub fn contents(&self) -> &GrowVec<u8> {
        &self.current
    }
}

impl Default for UndoBuffer {
    fn default() -> Self {
        UndoBuffer::new()
    }
}
