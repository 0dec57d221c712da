//! Line codec for the journal file
//!
//! One entry per line, fields joined by `|` in the fixed order
//! `book_name|author|genre|start_date|end_date|score|note`. Absent optional
//! fields are empty text. There is no escaping: a `|` inside a value shifts
//! every following field when the line is read back.

use thiserror::Error;

use crate::models::Entry;

/// Reserved field separator
pub const DELIMITER: char = '|';

const REQUIRED_FIELDS: usize = 4;

/// Why a stored line could not be turned into an [`Entry`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected at least 4 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("required field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Encode an entry as a single line, without a line terminator
pub fn encode(entry: &Entry) -> String {
    let score = entry
        .score
        .filter(|s| *s != 0)
        .map(|s| s.to_string())
        .unwrap_or_default();

    let fields: [&str; 7] = [
        &entry.book_name,
        &entry.author,
        &entry.genre,
        &entry.start_date,
        entry.end_date.as_deref().unwrap_or(""),
        &score,
        entry.note.as_deref().unwrap_or(""),
    ];

    let separator = DELIMITER.to_string();
    fields.join(separator.as_str())
}

/// Decode one line (terminator already stripped) back into an entry
pub fn decode(line: &str) -> Result<Entry, DecodeError> {
    let fields = split_fields(line);
    if fields.len() < REQUIRED_FIELDS {
        return Err(DecodeError::TooFewFields {
            found: fields.len(),
        });
    }

    let required = |index: usize, field: &'static str| -> Result<String, DecodeError> {
        match fields[index] {
            "" => Err(DecodeError::EmptyField { field }),
            value => Ok(value.to_string()),
        }
    };

    let book_name = required(0, "book_name")?;
    let author = required(1, "author")?;
    let genre = required(2, "genre")?;
    let start_date = required(3, "start_date")?;

    Ok(Entry {
        book_name,
        author,
        genre,
        start_date,
        end_date: optional(&fields, 4).map(str::to_string),
        score: optional(&fields, 5).and_then(parse_score),
        note: optional(&fields, 6).map(str::to_string),
    })
}

/// Decode a raw line as read from disk, terminator already stripped
pub fn decode_bytes(line: &[u8]) -> Result<Entry, DecodeError> {
    let line = std::str::from_utf8(line).map_err(|_| DecodeError::InvalidUtf8)?;
    decode(line)
}

/// Split a line on the delimiter, keeping empty fields in place
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

fn optional<'a>(fields: &[&'a str], index: usize) -> Option<&'a str> {
    fields.get(index).copied().filter(|value| !value.is_empty())
}

// Unreadable and zero scores both mean "unscored".
fn parse_score(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|s| *s != 0)
}
