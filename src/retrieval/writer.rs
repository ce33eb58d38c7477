use super::error::RetrievalError;
use crate::types::dataset::Dataset;
use std::path::Path;

/// Persists an assembled [`Dataset`] to a file.
pub trait DatasetWriter {
    /// File extension (without dot) used when naming output files.
    fn extension(&self) -> &str {
        "nc"
    }

    /// Writes `dataset` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns a [`RetrievalError`] if the dataset cannot be encoded or the
    /// file cannot be written.
    fn write(&self, dataset: &Dataset, path: &Path) -> Result<(), RetrievalError>;
}

impl<W: DatasetWriter + ?Sized> DatasetWriter for Box<W> {
    fn extension(&self) -> &str {
        (**self).extension()
    }

    fn write(&self, dataset: &Dataset, path: &Path) -> Result<(), RetrievalError> {
        (**self).write(dataset, path)
    }
}
