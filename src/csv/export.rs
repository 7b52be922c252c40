//! Catalog/wishlist CSV export
//!
//! Pure serialization: fixed header, one line per entry, RFC-4180 quoting.
//! Writing the result anywhere is the caller's concern.

use crate::models::Book;

/// Column order is part of the format; the importer understands it back.
pub const EXPORT_HEADER: &str =
    "ISBN,Title,Author,Total Copies,Available Copies,Language,Publisher,Published Date,Page Count,Notes";

/// Serialize entries to delimited text. Absent optionals become empty fields.
pub fn export_books(books: &[Book]) -> String {
    let mut out = String::with_capacity(64 * (books.len() + 1));
    out.push_str(EXPORT_HEADER);
    out.push('\n');

    for book in books {
        let page_count = book.page_count.map(|n| n.to_string()).unwrap_or_default();
        let fields = [
            escape(book.isbn.as_deref().unwrap_or_default()),
            escape(&book.title),
            escape(&book.author),
            book.total_copies.to_string(),
            book.available_copies.to_string(),
            escape(book.language.as_deref().unwrap_or_default()),
            escape(book.publisher.as_deref().unwrap_or_default()),
            escape(book.published_date.as_deref().unwrap_or_default()),
            page_count,
            escape(book.notes.as_deref().unwrap_or_default()),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it contains a separator, quote, or line break;
/// internal quotes are doubled.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_are_verbatim() {
        assert_eq!(escape("Matilda"), "Matilda");
    }

    #[test]
    fn comma_triggers_quoting() {
        assert_eq!(escape("Smith, John"), "\"Smith, John\"");
    }

    #[test]
    fn internal_quotes_are_doubled() {
        assert_eq!(escape("5\" shelf"), "\"5\"\" shelf\"");
    }

    #[test]
    fn newline_triggers_quoting() {
        assert_eq!(escape("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn absent_optionals_render_empty() {
        let book = Book::new("Matilda", "Roald Dahl", 2);
        let text = export_books(&[book]);
        let line = text.lines().nth(1).unwrap();
        assert_eq!(line, ",Matilda,Roald Dahl,2,2,,,,,");
    }

    #[test]
    fn export_is_idempotent() {
        let books = vec![Book::new("Matilda", "Roald Dahl", 2)];
        assert_eq!(export_books(&books), export_books(&books));
    }
}
