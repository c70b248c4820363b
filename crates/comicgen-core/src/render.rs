//! Prompt rendering for 4-panel comic records.
//!
//! `render` is a pure transformation from a [`ComicRecord`] to the text
//! block pasted into an external image generator. The section templates and
//! their field order are a compatibility surface: downstream consumers
//! expect this exact structure, so wording changes are breaking changes.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use thiserror::Error;

use crate::models::{ComicRecord, PANEL_COUNT, Panel};

/// Prompt template for the generated comic prompt (`MiniJinja`).
pub const COMIC_PROMPT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/comic_prompt.md.j2"
));

/// Rendering precondition failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// One of positions 1..=4 is absent from the panels mapping.
    #[error("panel {0} is missing; all four panels are required before rendering")]
    MissingPanel(u8),
    /// The embedded template failed to parse or render.
    #[error("failed to render comic prompt template: {0}")]
    Template(#[from] minijinja::Error),
}

#[derive(Debug, Serialize)]
struct PanelVars<'a> {
    position: u8,
    location: &'static str,
    purpose: &'a str,
    description: &'a str,
    composition: &'a str,
    text: &'a str,
    placement: &'static str,
    sound_effect: &'a str,
    reference_note: &'a str,
    transition_note: &'a str,
}

#[derive(Debug, Serialize)]
struct StyleVars<'a> {
    style_name: &'a str,
    character_style: &'a str,
    recurring_character_note: &'a str,
    character_expressions: &'a str,
    line_weight: &'static str,
    line_style: &'static str,
    line_color: &'a str,
    palette_style: &'a str,
    background: &'a str,
    overall_tone: &'static str,
    grid_style: &'a str,
    gutter_color: &'a str,
    gutter_width: &'static str,
    border_style: &'static str,
    border_color: &'a str,
    font_hint: &'a str,
    bubble_style: &'a str,
}

#[derive(Debug, Serialize)]
struct PromptVars<'a> {
    core_concept: &'a str,
    narrative_arc: &'a str,
    reader_feeling: &'a str,
    overall_scene: &'a str,
    comic_title: &'a str,
    content_characters: &'a str,
    content_action: &'a str,
    reference_overall_style: &'a str,
    reference_character: &'a str,
    reference_environment: &'a str,
    reference_pose: &'a str,
    reference_other: &'a str,
    panels: Vec<PanelVars<'a>>,
    style: StyleVars<'a>,
}

/// Fixed quadrant label for a panel position.
fn quadrant_label(position: u8) -> &'static str {
    match position {
        1 => "左上格 (Panel 1: Top-Left)",
        2 => "右上格 (Panel 2: Top-Right)",
        3 => "左下格 (Panel 3: Bottom-Left)",
        _ => "右下格 (Panel 4: Bottom-Right)",
    }
}

fn panel_vars(position: u8, panel: &Panel) -> PanelVars<'_> {
    PanelVars {
        position,
        location: quadrant_label(position),
        purpose: &panel.purpose,
        description: &panel.description,
        composition: panel.composition.as_str(),
        text: &panel.text,
        placement: panel.placement.label(),
        sound_effect: &panel.sound_effect,
        reference_note: &panel.reference_note,
        transition_note: &panel.transition_note,
    }
}

fn build_vars(record: &ComicRecord) -> PromptVars<'_> {
    // Iterate positions 1..=4 explicitly so output order never depends on
    // how the mapping was populated.
    let panels = (1..=PANEL_COUNT)
        .map(|position| panel_vars(position, &record.panels[&position]))
        .collect();

    let style = &record.style;
    PromptVars {
        core_concept: &record.core_concept,
        narrative_arc: &record.narrative_arc,
        reader_feeling: &record.reader_feeling,
        overall_scene: &record.overall_scene,
        comic_title: &record.comic_title,
        content_characters: &record.content_characters,
        content_action: &record.content_action,
        reference_overall_style: &record.reference_overall_style,
        reference_character: &record.reference_character,
        reference_environment: &record.reference_environment,
        reference_pose: &record.reference_pose,
        reference_other: &record.reference_other,
        panels,
        style: StyleVars {
            style_name: style.style_name.as_str(),
            character_style: &style.character_style,
            recurring_character_note: &style.recurring_character_note,
            character_expressions: &style.character_expressions,
            line_weight: style.line_weight.as_str(),
            line_style: style.line_style.as_str(),
            line_color: &style.line_color,
            palette_style: style.palette_style.as_str(),
            background: &style.background,
            overall_tone: style.overall_tone.as_str(),
            grid_style: &style.grid_style,
            gutter_color: &style.gutter_color,
            gutter_width: style.gutter_width.as_str(),
            border_style: style.border_style.as_str(),
            border_color: &style.border_color,
            font_hint: &style.font_hint,
            bubble_style: &style.bubble_style,
        },
    }
}

/// Renders a record into the final prompt text.
///
/// Deterministic and side-effect free: identical input yields identical
/// output. Field values are substituted verbatim — no escaping, no
/// interpretation of quotes or structural characters.
///
/// # Errors
/// Returns [`RenderError::MissingPanel`] naming the lowest absent position
/// when the panels mapping does not contain all of 1..=4.
pub fn render(record: &ComicRecord) -> Result<String, RenderError> {
    for position in 1..=PANEL_COUNT {
        if !record.panels.contains_key(&position) {
            return Err(RenderError::MissingPanel(position));
        }
    }

    let vars = build_vars(record);

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template("comic_prompt", COMIC_PROMPT_TEMPLATE)?;

    let output = env.get_template("comic_prompt")?.render(&vars)?;
    Ok(output)
}
