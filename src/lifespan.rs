use crate::Pattern;
use ahash::AHashMap as HashMap;

/// Number of consecutive generations each current pattern has existed.
///
/// Keys are exact absolute patterns. The map is rebuilt every generation, so a
/// pattern that vanishes loses its history and starts again from 1 if it ever
/// reappears.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifespanMap {
    spans: HashMap<Pattern, u32>,
}

impl LifespanMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map for the next generation from the patterns detected in it.
    ///
    /// A pattern present in `self` gets its count incremented, any other
    /// pattern starts at 1. Patterns absent from `current` are dropped.
    pub fn advance(&self, current: &[Pattern]) -> LifespanMap {
        let spans = current
            .iter()
            .map(|p| {
                let span = self.spans.get(p).map_or(1, |&old| old + 1);
                (p.clone(), span)
            })
            .collect();
        LifespanMap { spans }
    }

    pub fn get(&self, pattern: &Pattern) -> Option<u32> {
        self.spans.get(pattern).copied()
    }

    /// Overrides the recorded lifespan of `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `span` is zero; lifespans are always positive.
    pub fn set(&mut self, pattern: Pattern, span: u32) {
        assert!(span > 0, "Lifespans are always positive");
        self.spans.insert(pattern, span);
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, u32)> {
        self.spans.iter().map(|(p, &s)| (p, s))
    }

    /// Longest lifespan among the current patterns, zero if there are none.
    pub fn longest(&self) -> u32 {
        self.spans.values().copied().max().unwrap_or(0)
    }
}
