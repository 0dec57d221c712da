//! Entry filters for `journal list`

use crate::error::{JournalError, Result};
use crate::models::Entry;

/// Which filter the user asked for, before its argument is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Genre,
    MinScore,
    Reading,
    Completed,
}

/// A checked filter, ready to apply to decoded entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Genre(String),
    MinScore(u32),
    Reading,
    Completed,
}

impl Filter {
    /// Build a filter from its kind and the raw argument that followed the flag
    pub fn from_parts(kind: FilterKind, arg: Option<&str>) -> Result<Self> {
        match kind {
            FilterKind::Genre => match arg {
                Some(genre) => Ok(Filter::Genre(genre.to_string())),
                None => Err(JournalError::Usage(
                    "--genre needs a genre name".to_string(),
                )),
            },
            FilterKind::MinScore => {
                let raw = arg.ok_or_else(|| {
                    JournalError::Usage("--score needs a minimum score".to_string())
                })?;
                raw.trim().parse::<u32>().map(Filter::MinScore).map_err(|_| {
                    JournalError::Usage(format!(
                        "--score expects a non-negative integer, got '{}'",
                        raw
                    ))
                })
            }
            FilterKind::Reading => Ok(Filter::Reading),
            FilterKind::Completed => Ok(Filter::Completed),
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Filter::Genre(genre) => by_genre(entry, genre),
            Filter::MinScore(threshold) => by_min_score(entry, *threshold),
            Filter::Reading => is_reading(entry),
            Filter::Completed => is_completed(entry),
        }
    }
}

/// Exact, case-sensitive genre match
pub fn by_genre(entry: &Entry, genre: &str) -> bool {
    entry.genre == genre
}

/// Unscored entries count as zero
pub fn by_min_score(entry: &Entry, threshold: u32) -> bool {
    entry.score.unwrap_or(0) >= threshold
}

pub fn is_reading(entry: &Entry) -> bool {
    entry.is_reading()
}

pub fn is_completed(entry: &Entry) -> bool {
    !entry.is_reading()
}
