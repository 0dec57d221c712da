use serde::Serialize;
use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::Result;
use crate::filter::{Filter, FilterKind};
use crate::models::Entry;
use crate::renderer::Renderer;
use crate::store::{JournalStore, ListStats};

/// Filter flags as given on the command line; at most one is set
#[derive(Debug, Default)]
pub struct FilterArgs {
    pub genre: Option<String>,
    pub score: Option<String>,
    pub reading: bool,
    pub completed: bool,
}

impl FilterArgs {
    fn into_filter(self) -> Result<Option<Filter>> {
        let (kind, arg) = if let Some(genre) = self.genre {
            (FilterKind::Genre, Some(genre))
        } else if let Some(score) = self.score {
            (FilterKind::MinScore, Some(score))
        } else if self.reading {
            (FilterKind::Reading, None)
        } else if self.completed {
            (FilterKind::Completed, None)
        } else {
            return Ok(None);
        };

        Filter::from_parts(kind, arg.as_deref()).map(Some)
    }
}

#[derive(Serialize)]
struct JsonListing {
    entries: Vec<Entry>,
    #[serde(flatten)]
    stats: ListStats,
}

/// List journal entries, optionally filtered
pub fn run(
    config_path: Option<PathBuf>,
    file: Option<PathBuf>,
    filter: FilterArgs,
    json: bool,
) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;
    let filter = filter.into_filter()?;

    let store = JournalStore::new(file.unwrap_or_else(|| config.journal_file.clone()));
    let mut listing = store.list(filter)?;

    if json {
        let entries = listing.by_ref().collect::<Result<Vec<_>>>()?;
        let output = JsonListing {
            entries,
            stats: listing.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let renderer = Renderer::new(&config);
    println!("Reading journal:");
    for entry in listing.by_ref() {
        let entry = entry?;
        println!();
        display::print_markdown(&renderer.render_entry(&entry), config.display.color);
    }

    let stats = listing.stats();
    log::debug!(
        "scanned {} lines, {} skipped, {} matched",
        stats.scanned,
        stats.skipped,
        stats.matched
    );
    println!();
    println!("{}", renderer.render_summary(&stats));

    Ok(())
}
