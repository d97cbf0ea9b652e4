//! Read-only lookup over a catalog: one book by index or key, or a filtered
//! batch of books.
//!
//! Absence is `None` / a shorter result, never an error. Batch lookup with no
//! ref list returns the whole partition; an explicit empty list means "filter
//! to nothing" and returns an empty result.

use crate::book::{BookMetadata, BookRef};
use crate::catalog::Catalog;
use crate::language::Language;

impl Catalog {
    /// Resolve one book in `language` by positional index or symbolic key.
    ///
    /// An out-of-range index or unmatched key yields `None`. Index lookup is
    /// positional; key lookup returns the first record in partition order
    /// whose `id` matches.
    pub fn get_book(&self, language: Language, id: impl Into<BookRef>) -> Option<&BookMetadata> {
        let books = self.books(language);
        match id.into() {
            BookRef::Index(i) => books.get(i),
            BookRef::Key(key) => books.iter().find(|b| b.id == key),
        }
    }

    /// Resolve several books in `language`.
    ///
    /// With `refs: None`, returns the entire partition in table order. With
    /// `refs: Some(..)`, resolves each ref via [`Catalog::get_book`] and keeps
    /// only the hits, preserving input order and duplicates. The result can be
    /// shorter than the ref list; misses are dropped silently.
    pub fn get_all_books(
        &self,
        language: Language,
        refs: Option<&[BookRef]>,
    ) -> Vec<&BookMetadata> {
        match refs {
            None => self.books(language).iter().collect(),
            Some(refs) => refs
                .iter()
                .filter_map(|r| self.get_book(language, r.clone()))
                .collect(),
        }
    }
}

/// [`Catalog::get_book`] on the built-in catalog.
pub fn get_book(language: Language, id: impl Into<BookRef>) -> Option<&'static BookMetadata> {
    Catalog::builtin().get_book(language, id)
}

/// [`Catalog::get_all_books`] on the built-in catalog.
pub fn get_all_books(language: Language, refs: Option<&[BookRef]>) -> Vec<&'static BookMetadata> {
    Catalog::builtin().get_all_books(language, refs)
}
