use crate::types::query::VariableMode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    // The service reported an element this catalog does not describe.
    #[error("No metadata for variable '{code}' in {mode} mode; the variable catalog is out of date")]
    CatalogMiss { code: String, mode: VariableMode },
}
