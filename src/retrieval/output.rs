use super::error::RetrievalError;
use crate::types::availability::DateSpan;
use crate::types::query::VariableMode;
use std::fs;
use std::path::{Path, PathBuf};

/// `{station}_{dataset}_{start}_{end}_{core-vars|all-vars}.{extension}`, with
/// dates written as `YYYY-MM-DD`.
pub fn output_file_name(
    station: &str,
    dataset_name: &str,
    span: DateSpan,
    mode: VariableMode,
    extension: &str,
) -> String {
    format!(
        "{}_{}_{}_{}_{}.{}",
        station,
        dataset_name,
        span.start.format("%Y-%m-%d"),
        span.end.format("%Y-%m-%d"),
        mode.file_suffix(),
        extension
    )
}

/// Creates `dir` and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<PathBuf, RetrievalError> {
    if dir.exists() && !dir.is_dir() {
        return Err(RetrievalError::OutputNotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|e| RetrievalError::OutputDirCreation(dir.to_path_buf(), e))?;
    Ok(dir.to_path_buf())
}
