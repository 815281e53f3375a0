use std::collections::HashMap;

use crate::tokenize::{Segment, tokenize};

/// Hit/miss counters for a [`LineCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Per-line tokenization memo keyed by raw line text.
///
/// Tokenization depends on nothing but the line string, so a line that is
/// unchanged between keystrokes can reuse its segments. Entries live for
/// one compose pass: whatever the latest pass did not touch is swept at
/// [`LineCache::end_pass`], which bounds the cache by the current buffer.
#[derive(Debug)]
pub struct LineCache {
    entries: HashMap<String, Entry>,
    capacity: usize,
    generation: u64,
    /// Last pass that already swept before inserting.
    swept: u64,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct Entry {
    /// Segments tokenized at line index 0.
    segments: Vec<Segment>,
    last_used: u64,
}

impl LineCache {
    /// Creates a cache holding at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            generation: 0,
            swept: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Starts a compose pass.
    pub fn begin_pass(&mut self) {
        self.generation += 1;
    }

    /// Returns the segments for `line`, stamped with line `index`.
    pub fn segments(&mut self, index: usize, line: &str) -> Vec<Segment> {
        if let Some(entry) = self.entries.get_mut(line) {
            entry.last_used = self.generation;
            self.hits += 1;
            return restamp(entry.segments.clone(), index);
        }

        self.misses += 1;
        let segments = tokenize(line);
        if self.entries.len() >= self.capacity && self.swept != self.generation {
            // Full of last pass's lines: drop the stale ones now
            self.sweep();
            self.swept = self.generation;
        }
        if self.entries.len() < self.capacity {
            self.entries.insert(
                line.to_string(),
                Entry {
                    segments: segments.clone(),
                    last_used: self.generation,
                },
            );
        }
        restamp(segments, index)
    }

    /// Ends a compose pass, dropping lines the pass did not use.
    pub fn end_pass(&mut self) {
        self.sweep();
    }

    fn sweep(&mut self) {
        let before = self.entries.len();
        let generation = self.generation;
        self.entries.retain(|_, e| e.last_used == generation);
        let swept = before - self.entries.len();
        if swept > 0 {
            log::debug!(
                "line cache swept {swept} stale lines, {} remain",
                self.entries.len()
            );
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

fn restamp(mut segments: Vec<Segment>, index: usize) -> Vec<Segment> {
    for s in &mut segments {
        s.line = index;
    }
    segments
}
