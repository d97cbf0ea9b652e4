/// Catalog construction and loading errors. Lookup itself never errors: a
/// missing book is an absence (`None`), not a failure.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no partition for language '{0}'")]
    MissingLanguage(String),

    #[error("Duplicate book id '{id}' in language '{language}'")]
    DuplicateId { language: String, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageParseError {
    #[error("Unknown language code: {0}")]
    Unknown(String),
}
