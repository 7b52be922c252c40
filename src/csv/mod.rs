//! CSV import/export for the catalog and the wishlist
//!
//! Three pieces: a tolerant quote-aware parser (`parser`), the column
//! reconciliation importers (`import`), and the fixed-format exporter
//! (`export`). Parsing never fails; malformed quoting degrades to a
//! best-effort split. The only hard failure across the module is
//! `ImportError::EmptyInput` for a text with no usable rows at all.

pub mod export;
pub mod import;
pub mod parser;

pub use export::{EXPORT_HEADER, export_books};
pub use import::{
    CatalogImport, ImportError, RowSkip, SkipReason, WishlistImport, import_catalog,
    import_wishlist,
};
pub use parser::{parse_records, parse_table};
