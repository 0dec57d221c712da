//! Markdown renderer module
//!
//! Turns journal entries and listing totals into Markdown for the terminal.

use crate::config::Config;
use crate::date;
use crate::models::entry::{Entry, MAX_SCORE};
use crate::store::ListStats;

/// Markdown renderer for journal entries
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render one entry as a titled block of fields
    pub fn render_entry(&self, entry: &Entry) -> String {
        let mut output = format!("## {}\n\n", escape(&entry.book_name));

        output.push_str(&format!("- **Author:** {}\n", escape(&entry.author)));
        output.push_str(&format!("- **Genre:** {}\n", escape(&entry.genre)));
        output.push_str(&format!("- **Started:** {}\n", escape(&entry.start_date)));

        match &entry.end_date {
            Some(end) => {
                output.push_str(&format!("- **Finished:** {}", escape(end)));
                if self.config.display.show_duration {
                    if let Some(days) = reading_days(&entry.start_date, end) {
                        output.push_str(&format!(" *({})*", plural(days, "day")));
                    }
                }
                output.push('\n');
            }
            None => output.push_str("- **Status:** *currently reading*\n"),
        }

        if let Some(score) = entry.score {
            output.push_str(&format!("- **Score:** {}/{}\n", score, MAX_SCORE));
        }

        if let Some(note) = &entry.note {
            output.push_str(&format!("- **Note:** {}\n", escape(note)));
        }

        output.trim_end().to_string()
    }

    /// Render the closing `matched/total` line of a listing
    pub fn render_summary(&self, stats: &ListStats) -> String {
        let mut output = format!("Listed entries {}/{}", stats.matched, stats.scanned);
        if stats.skipped > 0 {
            output.push_str(&format!(
                " ({} skipped)",
                plural(stats.skipped as i64, "malformed line")
            ));
        }
        output
    }
}

/// Backslash-escape characters Markdown would otherwise treat as styling
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '~' | '#' | '[' | ']' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn reading_days(start: &str, end: &str) -> Option<i64> {
    let start = date::to_naive_date(start)?;
    let end = date::to_naive_date(end)?;
    let days = (end - start).num_days();
    (days >= 0).then_some(days)
}

fn plural(count: i64, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
