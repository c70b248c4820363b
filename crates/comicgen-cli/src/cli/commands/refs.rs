//! Reference preview command handler.

use comicgen_core::config::Config;
use comicgen_core::i18n::get_string;
use comicgen_core::references::{self, ReferenceCategory};

const ALL_CATEGORIES: [(ReferenceCategory, &str); 3] = [
    (ReferenceCategory::Composition, "ref_sidebar_comp"),
    (ReferenceCategory::Style, "ref_sidebar_style"),
    (ReferenceCategory::Coloring, "ref_sidebar_coloring"),
];

pub fn run(category: Option<ReferenceCategory>, config: &Config) {
    println!("{}", get_string("ref_sidebar_header", config.language));
    for (cat, header_key) in ALL_CATEGORIES {
        if category.is_some_and(|wanted| wanted != cat) {
            continue;
        }
        println!("\n{}", get_string(header_key, config.language));
        for (name, url) in references::entries(cat) {
            println!("  {name}: {url}");
        }
    }
}
