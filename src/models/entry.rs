use serde::{Deserialize, Serialize};

use crate::codec::DELIMITER;
use crate::date;
use crate::error::{JournalError, Result};

/// Highest personal score accepted when creating an entry
pub const MAX_SCORE: u32 = 5;

/// One reading journal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub book_name: String,
    pub author: String,
    pub genre: String,
    /// Date reading started (YYYY-MM-DD)
    pub start_date: String,
    /// Date reading finished; `None` while still reading
    pub end_date: Option<String>,
    /// Personal score; `None` when unscored
    pub score: Option<u32>,
    pub note: Option<String>,
}

impl Entry {
    /// Whether the book has no finish date yet
    pub fn is_reading(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Unvalidated entry input, as gathered from command-line flags
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub book_name: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub score: Option<String>,
    pub note: Option<String>,
}

impl EntryDraft {
    /// Validate the draft and build an [`Entry`]
    ///
    /// Every problem found is reported in a single error, one per line, so the
    /// user can fix all of them at once.
    pub fn build(self) -> Result<Entry> {
        let mut problems = Vec::new();

        let book_name = required(self.book_name, "Book name", "--name", &mut problems);
        let author = required(self.author, "Author", "--author", &mut problems);
        let genre = required(self.genre, "Genre", "--genre", &mut problems);
        let start_date = required(self.start_date, "Start date", "--start", &mut problems);

        let end_date = self.end_date.filter(|s| !s.is_empty());
        let note = self.note.filter(|s| !s.is_empty());

        for (flag, value) in [("--start", &start_date), ("--end", &end_date)] {
            if let Some(value) = value {
                if !date::validate(value) {
                    problems.push(format!(
                        "Invalid date '{}' for {}. Correct format is YYYY-MM-DD (ISO 8601)",
                        value, flag
                    ));
                }
            }
        }

        if let (Some(start), Some(end)) = (&start_date, &end_date) {
            if date::validate(start) && date::validate(end) && end < start {
                problems.push(format!(
                    "End date {} is earlier than start date {}",
                    end, start
                ));
            }
        }

        let score = match self.score.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if (1..=MAX_SCORE).contains(&n) => Some(n),
                _ => {
                    problems.push(format!(
                        "Score must be an integer between 1 and {}, got '{}'",
                        MAX_SCORE, raw
                    ));
                    None
                }
            },
        };

        let text_fields = [
            ("--name", &book_name),
            ("--author", &author),
            ("--genre", &genre),
            ("--note", &note),
        ];
        for (flag, value) in text_fields {
            if let Some(value) = value {
                if value.contains(DELIMITER) || value.contains(['\n', '\r']) {
                    problems.push(format!(
                        "Value for {} must not contain '{}' or line breaks",
                        flag, DELIMITER
                    ));
                }
            }
        }

        match (book_name, author, genre, start_date) {
            (Some(book_name), Some(author), Some(genre), Some(start_date))
                if problems.is_empty() =>
            {
                Ok(Entry {
                    book_name,
                    author,
                    genre,
                    start_date,
                    end_date,
                    score,
                    note,
                })
            }
            _ => Err(JournalError::Validation(problems.join("\n"))),
        }
    }
}

fn required(
    value: Option<String>,
    label: &str,
    flag: &str,
    problems: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            problems.push(format!("{} is required, with option {}", label, flag));
            None
        }
    }
}
