use influence_core::Sample;

use crate::error::LedgerError;
use crate::export::{export_csv, CsvExport};

/// Ordered, append-only collection of samples for one session.
///
/// Samples are never edited or removed once appended; read access hands out
/// shared references only. A sample's position is its only identity.
#[derive(Debug, Default)]
pub struct Ledger {
    samples: Vec<Sample>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `sample` and returns its zero-based position.
    ///
    /// No validation and no uniqueness check: identical samples are kept
    /// as separate entries.
    pub fn append(&mut self, sample: Sample) -> usize {
        self.samples.push(sample);
        let position = self.samples.len() - 1;
        tracing::debug!(position, "sample appended to ledger");
        position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Sample> {
        self.samples.get(position)
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Serializes every sample, in submission order, as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] only if the CSV writer fails, which does not
    /// happen for an in-memory buffer.
    pub fn export_csv(&self) -> Result<CsvExport, LedgerError> {
        export_csv(&self.samples)
    }

    /// Writes the CSV export to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file cannot be written.
    pub fn write_csv(&self, path: &std::path::Path) -> Result<usize, LedgerError> {
        let export = self.export_csv()?;
        std::fs::write(path, &export.bytes)?;
        tracing::info!(
            path = %path.display(),
            rows = self.samples.len(),
            "wrote sample export"
        );
        Ok(export.bytes.len())
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
