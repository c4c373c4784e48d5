use crate::{NormalizedPattern, Pattern};
use ahash::AHashSet as HashSet;
use anyhow::{Context, Result};
use flate2::{write::GzEncoder, Compression};
use std::io::Write;
use std::path::Path;

/// Every distinct shape seen during a run, in order of first discovery.
///
/// Shapes are compared after normalization, so the same still life found at
/// two places is recorded once. Entries are never removed.
#[derive(Clone, Debug, Default)]
pub struct PatternRegistry {
    seen: HashSet<NormalizedPattern>,
    order: Vec<NormalizedPattern>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the shape of `pattern`.
    ///
    /// # Returns
    /// `true` if the shape was not known before.
    pub fn insert(&mut self, pattern: &Pattern) -> bool {
        let normalized = pattern.normalized();
        if self.seen.contains(&normalized) {
            return false;
        }
        self.seen.insert(normalized.clone());
        self.order.push(normalized);
        true
    }

    /// Records every pattern and returns how many new shapes were found.
    pub fn extend<'a>(&mut self, patterns: impl IntoIterator<Item = &'a Pattern>) -> usize {
        patterns.into_iter().filter(|p| self.insert(p)).count()
    }

    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.seen.contains(&pattern.normalized())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedPattern> {
        self.order.iter()
    }

    fn write_blocks<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for pattern in &self.order {
            writer.write_all(pattern.to_text().as_bytes())?;
        }
        Ok(())
    }

    /// Writes the export block of every shape (see [`NormalizedPattern::to_text`]).
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        self.write_blocks(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Same as [`Self::write_to`], gzip-compressed.
    ///
    /// The gzip trailer is flushed to `writer` before returning, so a failed
    /// flush is reported instead of leaving a truncated stream behind.
    pub fn write_gz_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        self.write_blocks(&mut encoder)?;
        encoder.finish()?.flush()?;
        Ok(())
    }

    /// Exports all shapes to `path`. Paths ending in `.gz` are gzip-compressed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let writer = std::io::BufWriter::new(file);
        let result = if path.extension().is_some_and(|ext| ext == "gz") {
            self.write_gz_to(writer)
        } else {
            self.write_to(writer)
        };
        result.with_context(|| format!("Failed to export patterns to {}", path.display()))
    }
}
