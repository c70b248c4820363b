//! Saved prompt command handlers.

use anyhow::{Context, Result};
use comicgen_core::config::Config;
use comicgen_core::i18n::get_string;
use comicgen_core::render;
use comicgen_core::store::PromptStore;

pub fn list(store: &PromptStore, config: &Config) -> Result<()> {
    let summaries = store.list().context("list prompts")?;
    if summaries.is_empty() {
        println!("{}", get_string("prompt_saved_empty", config.language));
        return Ok(());
    }

    println!("{}", get_string("prompt_saved_header", config.language));
    for summary in summaries {
        let created = summary
            .created_at
            .map_or_else(|| "unknown".to_string(), |ts| ts.to_rfc3339());
        let approved = if summary.is_approved { "approved" } else { "draft" };
        println!(
            "{}  {}  {}  {}",
            summary.id, created, approved, summary.core_concept
        );
    }
    Ok(())
}

pub fn show(store: &PromptStore, id: &str) -> Result<()> {
    let record = store.load(id).with_context(|| format!("load prompt '{id}'"))?;

    // Prefer the prompt text captured at save time; re-render when the
    // record predates that field.
    match record.generated_prompt {
        Some(prompt) => println!("{prompt}"),
        None => {
            let prompt = render::render(&record).context("render prompt")?;
            println!("{prompt}");
        }
    }
    Ok(())
}

pub fn delete(store: &PromptStore, config: &Config, id: &str) -> Result<()> {
    let removed = store
        .delete(id)
        .with_context(|| format!("delete prompt '{id}'"))?;
    if removed {
        println!("{}", get_string("prompt_delete_success", config.language));
    } else {
        println!("{}", get_string("prompt_load_fail", config.language).replace("{id}", id));
    }
    Ok(())
}
