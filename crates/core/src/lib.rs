pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod language;
pub mod lookup;

pub mod prelude {
    pub use crate::book::*;
    pub use crate::catalog::Catalog;
    pub use crate::error::*;
    pub use crate::language::Language;
    pub use crate::lookup::{get_all_books, get_book};
}
