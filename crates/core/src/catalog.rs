//! The metadata table: an immutable per-language catalog of book records.
//!
//! A catalog is fixed once constructed. The built-in table is embedded in the
//! binary; `from_json` / `from_json_file` let callers supply their own table,
//! validated against the same invariants (a partition for every [`Language`],
//! unique ids within a partition).

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use crate::book::BookMetadata;
use crate::error::CatalogError;
use crate::language::Language;

/// JSON source of the built-in table, keyed by language code.
const BUILTIN_JSON: &str = include_str!("../assets/catalog.json");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Mapping from [`Language`] to an ordered sequence of [`BookMetadata`].
/// Immutable after construction; lookups hand out borrows into it.
#[derive(Debug, Clone)]
pub struct Catalog {
    partitions: HashMap<Language, Vec<BookMetadata>>,
}

impl Catalog {
    /// The catalog embedded in the binary. Parsed and validated on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            Catalog::from_json(BUILTIN_JSON).expect("embedded catalog is valid")
        })
    }

    /// Build a catalog from a JSON object keyed by language code, each value an
    /// ordered array of book records. Fails if any [`Language`] lacks a
    /// partition or a partition repeats an id.
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let partitions: HashMap<Language, Vec<BookMetadata>> = serde_json::from_str(json)?;
        let catalog = Catalog { partitions };
        catalog.validate()?;
        tracing::debug!(
            languages = catalog.partitions.len(),
            books = catalog.partitions.values().map(Vec::len).sum::<usize>(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Read and build a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for lang in Language::ALL {
            let Some(books) = self.partitions.get(&lang) else {
                return Err(CatalogError::MissingLanguage(lang.code().to_string()));
            };
            let mut seen = HashSet::new();
            for book in books {
                if !seen.insert(book.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        language: lang.code().to_string(),
                        id: book.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The full ordered partition for `language`, as a read-only view.
    ///
    /// Validation guarantees a partition per language; if that invariant were
    /// ever broken this degrades to an empty slice rather than panicking.
    pub fn books(&self, language: Language) -> &[BookMetadata] {
        self.partitions
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
