//! Prompt generation command handlers.

use std::fs;

use anyhow::{Context, Result};
use comicgen_core::config::Config;
use comicgen_core::i18n::get_string;
use comicgen_core::models::ComicRecord;
use comicgen_core::render;
use comicgen_core::store::PromptStore;

/// Renders a record into the final prompt and optionally saves it.
pub fn run(
    record_path: Option<&str>,
    save: bool,
    approve: bool,
    store: &PromptStore,
    config: &Config,
) -> Result<()> {
    let mut record = match record_path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read record from {path}"))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parse record from {path}"))?
        }
        None => ComicRecord::example(),
    };

    record
        .validate()
        .context("record is missing required fields")?;

    let prompt = render::render(&record).context("render prompt")?;
    println!("{prompt}");

    if save {
        record.generated_prompt = Some(prompt);
        record.is_approved = approve;
        let id = store.save(&mut record).context("save prompt")?;
        eprintln!(
            "{}",
            get_string("prompt_save_success", config.language).replace("{id}", &id)
        );
    }

    Ok(())
}

/// Prints the built-in example record as pretty JSON.
pub fn example() -> Result<()> {
    let record = ComicRecord::example();
    let json = serde_json::to_string_pretty(&record).context("serialize example record")?;
    println!("{json}");
    Ok(())
}
