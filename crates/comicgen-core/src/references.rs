//! Reference image previews for composition, style, and coloring terms.
//!
//! The URLs are placeholders intended to be swapped for real example
//! assets; the lookup keys match the option strings used in the data
//! model.

use serde::{Deserialize, Serialize};

/// Categories of reference previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceCategory {
    Composition,
    Style,
    Coloring,
}

impl ReferenceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceCategory::Composition => "composition",
            ReferenceCategory::Style => "style",
            ReferenceCategory::Coloring => "coloring",
        }
    }
}

const COMPOSITION: &[(&str, &str)] = &[
    (
        "Close-up",
        "https://via.placeholder.com/150/FF0000/FFFFFF?text=Close-Up",
    ),
    (
        "Medium shot",
        "https://via.placeholder.com/150/00FF00/FFFFFF?text=Medium+Shot",
    ),
    (
        "Long shot",
        "https://via.placeholder.com/150/0000FF/FFFFFF?text=Long+Shot",
    ),
    (
        "POV (Point of View)",
        "https://via.placeholder.com/150/FFFF00/000000?text=POV",
    ),
    (
        "Bird's-eye view",
        "https://via.placeholder.com/150/FF00FF/FFFFFF?text=Bird's-Eye",
    ),
];

const STYLE: &[(&str, &str)] = &[
    (
        "Clean Slice-of-Life Anime",
        "https://via.placeholder.com/150/AAAAAA/FFFFFF?text=SliceOfLife",
    ),
    (
        "Chibi / Cute",
        "https://via.placeholder.com/150/FFAAAA/000000?text=Chibi",
    ),
    (
        "Gag Manga",
        "https://via.placeholder.com/150/AAFFAA/000000?text=Gag+Manga",
    ),
    (
        "Simple Cartoon",
        "https://via.placeholder.com/150/AAAAFF/000000?text=Cartoon",
    ),
];

const COLORING: &[(&str, &str)] = &[
    (
        "Flat Colors",
        "https://via.placeholder.com/150/CCCCCC/000000?text=Flat+Color",
    ),
    (
        "Cell Shading",
        "https://via.placeholder.com/150/E6E6E6/000000?text=Cell+Shading",
    ),
    (
        "Watercolor",
        "https://via.placeholder.com/150/D0D0FF/000000?text=Watercolor",
    ),
    (
        "Black and White",
        "https://via.placeholder.com/150/FFFFFF/000000?text=B%26W",
    ),
];

/// Returns all `(name, url)` entries for a category, in display order.
pub fn entries(category: ReferenceCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        ReferenceCategory::Composition => COMPOSITION,
        ReferenceCategory::Style => STYLE,
        ReferenceCategory::Coloring => COLORING,
    }
}

/// Looks up the preview URL for a term within a category.
pub fn lookup(category: ReferenceCategory, key: &str) -> Option<&'static str> {
    entries(category).iter().find(|(k, _)| *k == key).map(|&(_, url)| url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompositionKind;

    #[test]
    fn test_lookup_known_and_unknown() {
        assert!(lookup(ReferenceCategory::Composition, "Close-up").is_some());
        assert!(lookup(ReferenceCategory::Style, "Gag Manga").is_some());
        assert!(lookup(ReferenceCategory::Coloring, "Not A Thing").is_none());
    }

    #[test]
    fn test_composition_entries_cover_fixed_kinds() {
        for kind in CompositionKind::all() {
            assert!(
                lookup(ReferenceCategory::Composition, kind.as_str()).is_some(),
                "no composition preview for {}",
                kind.as_str()
            );
        }
    }

    #[test]
    fn test_category_tags() {
        assert_eq!(ReferenceCategory::Composition.as_str(), "composition");
        assert_eq!(
            serde_json::to_string(&ReferenceCategory::Coloring).unwrap(),
            "\"coloring\""
        );
    }
}
