//! Data model for 4-panel comic prompts.
//!
//! A [`ComicRecord`] aggregates the story description, exactly four
//! [`Panel`]s keyed by position 1–4, and one [`StyleProfile`]. Fields that
//! offer a fixed choice plus a free-form escape hatch are modeled as
//! `Fixed(..) | Custom(String)` variants that collapse to a plain string
//! only at the render boundary.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of panels in a comic. Positions are 1..=4, non-renumberable.
pub const PANEL_COUNT: u8 = 4;

/// Fixed composition/angle choices offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositionKind {
    #[serde(rename = "Close-up")]
    CloseUp,
    #[serde(rename = "Medium shot")]
    MediumShot,
    #[serde(rename = "Long shot")]
    LongShot,
    #[serde(rename = "POV (Point of View)")]
    Pov,
    #[serde(rename = "Bird's-eye view")]
    BirdsEye,
}

impl CompositionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CompositionKind::CloseUp => "Close-up",
            CompositionKind::MediumShot => "Medium shot",
            CompositionKind::LongShot => "Long shot",
            CompositionKind::Pov => "POV (Point of View)",
            CompositionKind::BirdsEye => "Bird's-eye view",
        }
    }

    /// Returns all fixed compositions for pickers.
    pub fn all() -> &'static [CompositionKind] {
        &[
            CompositionKind::CloseUp,
            CompositionKind::MediumShot,
            CompositionKind::LongShot,
            CompositionKind::Pov,
            CompositionKind::BirdsEye,
        ]
    }
}

/// Composition of a panel: a fixed choice or a free-form "other" value.
///
/// Serialized untagged, so fixed choices persist as their canonical display
/// string and anything else loads back as `Custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Composition {
    Fixed(CompositionKind),
    Custom(String),
}

impl Composition {
    pub fn as_str(&self) -> &str {
        match self {
            Composition::Fixed(kind) => kind.as_str(),
            Composition::Custom(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Composition::Custom(text) if text.trim().is_empty())
    }
}

impl Default for Composition {
    fn default() -> Self {
        Composition::Custom(String::new())
    }
}

/// Where text sits inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    NoText,
    CaptionBelow,
    SpeechBubble,
    ThoughtBubble,
    Signage,
    SoundEffectText,
}

impl Placement {
    /// Human-readable label used in rendered prompt text.
    pub fn label(self) -> &'static str {
        match self {
            Placement::NoText => "No text",
            Placement::CaptionBelow => "Caption below",
            Placement::SpeechBubble => "Speech bubble",
            Placement::ThoughtBubble => "Thought bubble",
            Placement::Signage => "Signage/On-screen",
            Placement::SoundEffectText => "Sound effect text",
        }
    }
}

/// One of the four ordered panel slots.
///
/// `purpose`, `description`, and `composition` are required; everything else
/// defaults to empty. No cross-panel invariant is enforced — a
/// `transition_note` on panel 1 is permitted even though it is meaningless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Panel {
    /// Narrative role of the panel (setup, escalation, ...).
    pub purpose: String,
    /// Visual content description.
    pub description: String,
    /// Camera/angle term, fixed or free-form.
    pub composition: Composition,
    /// In-panel text, may be empty.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub sound_effect: String,
    #[serde(default)]
    pub reference_note: String,
    /// Narrative link to the previous panel.
    #[serde(default)]
    pub transition_note: String,
}

/// Fixed base-style choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseStyle {
    #[serde(rename = "Clean Slice-of-Life Anime")]
    CleanSliceOfLifeAnime,
    #[serde(rename = "Chibi / Cute")]
    ChibiCute,
    #[serde(rename = "Gag Manga")]
    GagManga,
    #[serde(rename = "Simple Cartoon")]
    SimpleCartoon,
}

impl BaseStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BaseStyle::CleanSliceOfLifeAnime => "Clean Slice-of-Life Anime",
            BaseStyle::ChibiCute => "Chibi / Cute",
            BaseStyle::GagManga => "Gag Manga",
            BaseStyle::SimpleCartoon => "Simple Cartoon",
        }
    }
}

/// Base style name: fixed choice or custom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleName {
    Fixed(BaseStyle),
    Custom(String),
}

impl StyleName {
    pub fn as_str(&self) -> &str {
        match self {
            StyleName::Fixed(style) => style.as_str(),
            StyleName::Custom(text) => text,
        }
    }
}

impl Default for StyleName {
    fn default() -> Self {
        StyleName::Fixed(BaseStyle::CleanSliceOfLifeAnime)
    }
}

/// Fixed palette choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteKind {
    #[serde(rename = "Flat Colors")]
    FlatColors,
    #[serde(rename = "Cell Shading")]
    CellShading,
    #[serde(rename = "Watercolor")]
    Watercolor,
    #[serde(rename = "Black and White")]
    BlackAndWhite,
}

impl PaletteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteKind::FlatColors => "Flat Colors",
            PaletteKind::CellShading => "Cell Shading",
            PaletteKind::Watercolor => "Watercolor",
            PaletteKind::BlackAndWhite => "Black and White",
        }
    }
}

/// Palette style: fixed choice or custom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteStyle {
    Fixed(PaletteKind),
    Custom(String),
}

impl PaletteStyle {
    pub fn as_str(&self) -> &str {
        match self {
            PaletteStyle::Fixed(kind) => kind.as_str(),
            PaletteStyle::Custom(text) => text,
        }
    }
}

impl Default for PaletteStyle {
    fn default() -> Self {
        PaletteStyle::Fixed(PaletteKind::FlatColors)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineWeight {
    #[default]
    #[serde(rename = "clean, consistent medium line weight.")]
    CleanMedium,
    #[serde(rename = "fine line weight")]
    Fine,
    #[serde(rename = "bold line weight")]
    Bold,
    #[serde(rename = "varied line weight")]
    Varied,
    #[serde(rename = "sketchy")]
    Sketchy,
}

impl LineWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            LineWeight::CleanMedium => "clean, consistent medium line weight.",
            LineWeight::Fine => "fine line weight",
            LineWeight::Bold => "bold line weight",
            LineWeight::Varied => "varied line weight",
            LineWeight::Sketchy => "sketchy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    #[serde(rename = "digital ink look.")]
    DigitalInk,
    #[serde(rename = "pencil sketch look")]
    PencilSketch,
    #[serde(rename = "brush stroke look")]
    BrushStroke,
    #[serde(rename = "pixelated look")]
    Pixelated,
}

impl LineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::DigitalInk => "digital ink look.",
            LineStyle::PencilSketch => "pencil sketch look",
            LineStyle::BrushStroke => "brush stroke look",
            LineStyle::Pixelated => "pixelated look",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverallTone {
    #[default]
    #[serde(rename = "warm and light pastel palette")]
    WarmPastel,
    #[serde(rename = "cool palette")]
    Cool,
    #[serde(rename = "vintage palette")]
    Vintage,
    #[serde(rename = "high-contrast")]
    HighContrast,
    #[serde(rename = "monochrome")]
    Monochrome,
    #[serde(rename = "neon")]
    Neon,
}

impl OverallTone {
    pub fn as_str(self) -> &'static str {
        match self {
            OverallTone::WarmPastel => "warm and light pastel palette",
            OverallTone::Cool => "cool palette",
            OverallTone::Vintage => "vintage palette",
            OverallTone::HighContrast => "high-contrast",
            OverallTone::Monochrome => "monochrome",
            OverallTone::Neon => "neon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GutterWidth {
    Thin,
    #[default]
    Medium,
    Thick,
    None,
}

impl GutterWidth {
    pub fn as_str(self) -> &'static str {
        match self {
            GutterWidth::Thin => "thin",
            GutterWidth::Medium => "medium",
            GutterWidth::Thick => "thick",
            GutterWidth::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderStyle {
    #[default]
    #[serde(rename = "solid thin line")]
    SolidThin,
    #[serde(rename = "solid medium line")]
    SolidMedium,
    #[serde(rename = "solid thick line")]
    SolidThick,
    #[serde(rename = "rounded corners")]
    Rounded,
    #[serde(rename = "no border")]
    NoBorder,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::SolidThin => "solid thin line",
            BorderStyle::SolidMedium => "solid medium line",
            BorderStyle::SolidThick => "solid thick line",
            BorderStyle::Rounded => "rounded corners",
            BorderStyle::NoBorder => "no border",
        }
    }
}

fn default_grid_style() -> String {
    "standard 2x2".to_string()
}

fn default_gutter_color() -> String {
    "#FFFFFF".to_string()
}

fn default_border_color() -> String {
    "#4B3A26".to_string()
}

/// Global visual style for the whole comic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleProfile {
    pub style_name: StyleName,
    pub character_style: String,
    pub recurring_character_note: String,
    pub character_expressions: String,
    pub line_weight: LineWeight,
    pub line_style: LineStyle,
    pub line_color: String,
    pub palette_style: PaletteStyle,
    pub background: String,
    pub overall_tone: OverallTone,
    /// Fixed to the 2x2 layout in current scope; present in the persisted
    /// shape but not user-editable.
    pub grid_style: String,
    pub gutter_color: String,
    pub gutter_width: GutterWidth,
    pub border_style: BorderStyle,
    pub border_color: String,
    pub font_hint: String,
    pub bubble_style: String,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            style_name: StyleName::default(),
            character_style: String::new(),
            recurring_character_note: String::new(),
            character_expressions: String::new(),
            line_weight: LineWeight::default(),
            line_style: LineStyle::default(),
            line_color: String::new(),
            palette_style: PaletteStyle::default(),
            background: String::new(),
            overall_tone: OverallTone::default(),
            grid_style: default_grid_style(),
            gutter_color: default_gutter_color(),
            gutter_width: GutterWidth::default(),
            border_style: BorderStyle::default(),
            border_color: default_border_color(),
            font_hint: String::new(),
            bubble_style: String::new(),
        }
    }
}

/// A complete comic prompt record.
///
/// Constructed transiently per editing session with `id = None`; the store
/// assigns the id on first save and refreshes `updated_at` on every save,
/// leaving `created_at` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComicRecord {
    /// Assigned at first save, stable thereafter.
    pub id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    pub core_concept: String,
    #[serde(default)]
    pub narrative_arc: String,
    #[serde(default)]
    pub reader_feeling: String,

    pub overall_scene: String,
    #[serde(default)]
    pub comic_title: String,
    pub content_characters: String,
    pub content_action: String,

    #[serde(default)]
    pub reference_overall_style: String,
    #[serde(default)]
    pub reference_character: String,
    #[serde(default)]
    pub reference_environment: String,
    #[serde(default)]
    pub reference_pose: String,
    #[serde(default)]
    pub reference_other: String,

    /// Panel details keyed by position; must contain exactly 1..=4 before
    /// rendering.
    pub panels: BTreeMap<u8, Panel>,
    pub style: StyleProfile,

    #[serde(default)]
    pub generated_prompt: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub user_notes: String,
}

/// Required fields are missing or empty.
#[derive(Debug, Error)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<String>,
}

impl ComicRecord {
    /// Creates a transient record with the four required story fields set.
    pub fn new(
        core_concept: impl Into<String>,
        overall_scene: impl Into<String>,
        content_characters: impl Into<String>,
        content_action: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            created_at: Utc::now(),
            updated_at: None,
            core_concept: core_concept.into(),
            narrative_arc: String::new(),
            reader_feeling: String::new(),
            overall_scene: overall_scene.into(),
            comic_title: String::new(),
            content_characters: content_characters.into(),
            content_action: content_action.into(),
            reference_overall_style: String::new(),
            reference_character: String::new(),
            reference_environment: String::new(),
            reference_pose: String::new(),
            reference_other: String::new(),
            panels: BTreeMap::new(),
            style: StyleProfile::default(),
            generated_prompt: None,
            is_approved: false,
            user_notes: String::new(),
        }
    }

    /// Checks presence of required fields (nothing beyond presence).
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming every empty required field,
    /// including per-panel `purpose`, `description`, and `composition`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();

        let required = [
            ("core_concept", &self.core_concept),
            ("overall_scene", &self.overall_scene),
            ("content_characters", &self.content_characters),
            ("content_action", &self.content_action),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                missing.push(name.to_string());
            }
        }

        for (position, panel) in &self.panels {
            if panel.purpose.trim().is_empty() {
                missing.push(format!("panels.{position}.purpose"));
            }
            if panel.description.trim().is_empty() {
                missing.push(format!("panels.{position}.description"));
            }
            if panel.composition.is_empty() {
                missing.push(format!("panels.{position}.composition"));
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Builds the default example set: Mimi the cat distracting its owner.
    pub fn example() -> Self {
        let mut record = ComicRecord::new(
            "A cat tries to get its owner's attention while they work.",
            "Simple home office corner with desk, laptop, chair.",
            "An orange tabby cat 'Mimi'",
            "progressively distracting its owner who is using a laptop",
        );
        record.narrative_arc = "1. Setup: Owner works, cat watches.\n\
             2. Rising Action: Gentle nudge.\n\
             3. Climax/Escalation: Walks on keyboard.\n\
             4. Resolution: Owner gives in."
            .to_string();
        record.reader_feeling = "Amused, relatable, heartwarming".to_string();
        record.comic_title = "Work 'Assistant'".to_string();
        record.reference_overall_style = "e.g., 'Chi's Sweet Home' manga style".to_string();
        record.reference_character =
            "Slightly chubby orange tabby cat, big expressive eyes.".to_string();
        record.reference_environment = "Modern clean desk setup, laptop, mouse.".to_string();
        record.reference_pose =
            "Common cat poses (loafing, stretching, walking on things)".to_string();

        record.panels.insert(
            1,
            Panel {
                purpose: "Setup: Introduce character/situation".to_string(),
                description: "Owner typing at laptop. Orange cat 'Mimi' sits nearby, \
                              watching intently."
                    .to_string(),
                composition: Composition::Fixed(CompositionKind::MediumShot),
                sound_effect: "tap tap tap (keyboard)".to_string(),
                ..Panel::default()
            },
        );
        record.panels.insert(
            2,
            Panel {
                purpose: "Rising Action: Initial attempt".to_string(),
                description: "Mimi gently paws at owner's arm. Owner glances slightly annoyed."
                    .to_string(),
                composition: Composition::Fixed(CompositionKind::CloseUp),
                text: "Hmm?".to_string(),
                placement: Placement::ThoughtBubble,
                sound_effect: "pat pat".to_string(),
                reference_note: "Cat pleading expression".to_string(),
                ..Panel::default()
            },
        );
        record.panels.insert(
            3,
            Panel {
                purpose: "Turning Point/Escalation: Bold move".to_string(),
                description: "Mimi walks directly onto the laptop keyboard. Owner stops \
                              typing, surprised. Gibberish on screen."
                    .to_string(),
                composition: Composition::Fixed(CompositionKind::MediumShot),
                text: "Hey!".to_string(),
                placement: Placement::SpeechBubble,
                sound_effect: "thump!".to_string(),
                ..Panel::default()
            },
        );
        record.panels.insert(
            4,
            Panel {
                purpose: "Resolution/Reaction: Outcome".to_string(),
                description: "Owner sighs, hand on face, other hand petting Mimi who is now \
                              loafing on keyboard, purring."
                    .to_string(),
                composition: Composition::Custom("Medium close-up".to_string()),
                text: "Okay, five-minute break...".to_string(),
                placement: Placement::ThoughtBubble,
                sound_effect: "purrrr~".to_string(),
                reference_note: "Cat looking smug/satisfied".to_string(),
                ..Panel::default()
            },
        );

        record.style = StyleProfile {
            character_style: "Cute, slightly chibi anthropomorphic cat, simple human elements"
                .to_string(),
            recurring_character_note: "**Key: Keep 'Mimi' the orange tabby design and owner's \
                                       simple style consistent**"
                .to_string(),
            character_expressions: "Cat: Expectant -> Pleading -> Innocent/Bold -> \
                                    Satisfied/Smug. Human: Focused -> Annoyed -> Surprised -> \
                                    Resigned"
                .to_string(),
            line_color: "dark brown".to_string(),
            background: "light cream or pale blue simple background per panel".to_string(),
            font_hint: "clean, rounded sans-serif comic font".to_string(),
            bubble_style: "standard oval (speech), cloud (thought)".to_string(),
            ..StyleProfile::default()
        };

        record
    }
}
