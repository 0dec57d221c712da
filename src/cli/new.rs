use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::Result;
use crate::models::EntryDraft;
use crate::renderer::Renderer;
use crate::store::JournalStore;

/// Validate a new entry and append it to the journal
pub fn run(
    config_path: Option<PathBuf>,
    file: Option<PathBuf>,
    draft: EntryDraft,
) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;
    let entry = draft.build()?;

    let store = JournalStore::new(file.unwrap_or_else(|| config.journal_file.clone()));
    store.append(&entry)?;

    let renderer = Renderer::new(&config);
    println!("New entry added to {}:", store.path().display());
    display::print_markdown(&renderer.render_entry(&entry), config.display.color);

    Ok(())
}
