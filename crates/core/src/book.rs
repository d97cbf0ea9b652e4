//! Book records and the identifier union used to address them.

use serde::{Deserialize, Serialize};

/// Descriptive metadata for one book. `id` is the stable symbolic key within a
/// language partition; everything else is opaque to the lookup layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookMetadata {
    /// Stable symbolic key, unique within its partition (e.g. "moby-dick").
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// How a caller addresses a book: by position in the partition or by symbolic
/// key. Replaces a dynamic number-or-record parameter with an explicit tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookRef {
    /// Zero-based position in the language's ordered partition.
    Index(usize),
    /// Matches the first record whose `id` equals this key.
    Key(String),
}

impl BookRef {
    /// Parse the CLI argument form: an all-digit string is a positional index,
    /// anything else a symbolic key.
    pub fn parse(s: &str) -> BookRef {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            match s.parse::<usize>() {
                Ok(i) => BookRef::Index(i),
                Err(_) => BookRef::Key(s.to_string()),
            }
        } else {
            BookRef::Key(s.to_string())
        }
    }
}

impl From<usize> for BookRef {
    fn from(i: usize) -> Self {
        BookRef::Index(i)
    }
}

impl From<&str> for BookRef {
    fn from(key: &str) -> Self {
        BookRef::Key(key.to_string())
    }
}

impl From<String> for BookRef {
    fn from(key: String) -> Self {
        BookRef::Key(key)
    }
}

impl From<&BookMetadata> for BookRef {
    fn from(book: &BookMetadata) -> Self {
        BookRef::Key(book.id.clone())
    }
}
