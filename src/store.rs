//! Journal file storage
//!
//! The journal is an append-only text file with one encoded entry per line.
//! Every command opens the file, does one linear pass or one append, and
//! closes it again. There is no locking: running two `journal` processes
//! against the same file at once is not supported.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::codec;
use crate::error::{JournalError, Result};
use crate::filter::Filter;
use crate::models::Entry;

/// Handle on the backing journal file
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a new line at the end of the journal
    pub fn append(&self, entry: &Entry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    JournalError::Store(format!(
                        "Cannot create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                JournalError::Store(format!(
                    "Cannot open '{}' for writing: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let mut line = codec::encode(entry);
        line.push('\n');
        file.write_all(line.as_bytes())?;

        log::debug!("appended '{}' to {}", entry.book_name, self.path.display());
        Ok(())
    }

    /// Open the journal for a single filtered pass over its entries
    pub fn list(&self, filter: Option<Filter>) -> Result<Listing<BufReader<File>>> {
        let file = File::open(&self.path).map_err(|e| {
            JournalError::Store(format!(
                "Cannot open '{}' for reading: {}. Add an entry with 'journal new' first.",
                self.path.display(),
                e
            ))
        })?;

        Ok(Listing::from_reader(BufReader::new(file), filter))
    }
}

/// Counters for one pass over the journal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListStats {
    /// Physical lines read
    pub scanned: usize,
    /// Lines that could not be decoded
    pub skipped: usize,
    /// Entries that passed the filter
    pub matched: usize,
}

/// Lazy, one-pass iterator over the entries of a journal, in file order
///
/// Lines are read as raw bytes, so text that is not valid UTF-8 counts as
/// one more malformed line. Malformed lines are logged and skipped. I/O
/// errors are yielded and end the pass.
pub struct Listing<R> {
    reader: R,
    buf: Vec<u8>,
    filter: Option<Filter>,
    stats: ListStats,
    failed: bool,
}

impl<R: BufRead> Listing<R> {
    pub fn from_reader(reader: R, filter: Option<Filter>) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            filter,
            stats: ListStats::default(),
            failed: false,
        }
    }

    /// Counts so far; final once the iterator is exhausted
    pub fn stats(&self) -> ListStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for Listing<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            }
            self.stats.scanned += 1;

            let entry = match codec::decode_bytes(strip_terminator(&self.buf)) {
                Ok(entry) => entry,
                Err(e) => {
                    self.stats.skipped += 1;
                    log::warn!(
                        "skipping line {}: {}",
                        self.stats.scanned,
                        JournalError::from(e)
                    );
                    continue;
                }
            };

            let keep = self.filter.as_ref().is_none_or(|f| f.matches(&entry));
            if keep {
                self.stats.matched += 1;
                return Some(Ok(entry));
            }
        }
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
