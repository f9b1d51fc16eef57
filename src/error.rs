use thiserror::Error;

/// Errors produced by the catalog mutation layer and the config store.
///
/// Validation and not-found errors abort the operation before any state
/// change. `Io`/`Json` surface persistence failures; the in-memory document
/// is never rolled back when one of these occurs after a mutation.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("an item named '{0}' already exists")]
    DuplicateName(String),

    #[error("no category with id {0}")]
    CategoryNotFound(String),

    #[error("no item with id {0}")]
    ItemNotFound(String),

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// True for errors that left the document untouched.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CatalogError::EmptyField(_)
                | CatalogError::DuplicateName(_)
                | CatalogError::CategoryNotFound(_)
                | CatalogError::ItemNotFound(_)
        )
    }
}
