//! UI string catalog with English/Chinese translations.
//!
//! Lookup falls back to English when a key has no translation in the
//! requested language, and to a visible `MISSING_KEY:` sentinel when the
//! key is unknown entirely, so a bad key shows up in output instead of
//! panicking.

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Display label for the language itself.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("page_title", "4-Panel Comic Prompt Generator"),
    (
        "header_markdown",
        "Fill in the details below to generate a detailed prompt for an AI image generator.",
    ),
    ("story_header", "Overall Story & Scene"),
    ("panel_header", "Individual Panel Details"),
    ("style_header", "Comic Style Profile"),
    ("prompt_display_header", "Generated Prompt"),
    ("prompt_save_success", "Prompt saved successfully with ID: {id}"),
    ("prompt_save_fail", "Failed to save prompt."),
    ("prompt_load_fail", "Failed to load prompt {id}"),
    ("prompt_delete_success", "Prompt deleted successfully!"),
    ("prompt_delete_fail", "Failed to delete prompt."),
    ("prompt_saved_header", "Your Saved Prompts"),
    (
        "prompt_saved_empty",
        "You haven't saved any prompts yet. Create a new prompt and approve it to see it here.",
    ),
    ("prompt_created_at", "Created: {dt}"),
    ("prompt_updated_at", "Last Updated: {dt}"),
    ("ref_sidebar_header", "Reference Previews"),
    ("ref_sidebar_comp", "Composition Angles"),
    ("ref_sidebar_style", "Example Styles"),
    ("ref_sidebar_coloring", "Example Coloring"),
    ("ref_no_preview", "(No image preview for {key})"),
];

// `header_markdown` stays English-only: the CLI help text it accompanies is
// not translated.
const ZH: &[(&str, &str)] = &[
    ("page_title", "四格漫画提示词生成器"),
    ("story_header", "整体故事与场景"),
    ("panel_header", "单格细节"),
    ("style_header", "漫画风格配置文件"),
    ("prompt_display_header", "生成的提示词"),
    ("prompt_save_success", "提示词成功保存，ID: {id}"),
    ("prompt_save_fail", "保存提示词失败。"),
    ("prompt_load_fail", "加载提示词失败 {id}"),
    ("prompt_delete_success", "提示词删除成功！"),
    ("prompt_delete_fail", "删除提示词失败。"),
    ("prompt_saved_header", "您已保存的提示词"),
    (
        "prompt_saved_empty",
        "您还没有保存任何提示词。创建一个新提示词并批准它，即可在此处看到。",
    ),
    ("prompt_created_at", "创建于: {dt}"),
    ("prompt_updated_at", "最后更新: {dt}"),
    ("ref_sidebar_header", "参考预览"),
    ("ref_sidebar_comp", "构图角度"),
    ("ref_sidebar_style", "示例风格"),
    ("ref_sidebar_coloring", "示例着色"),
    ("ref_no_preview", "({key} 无图像预览)"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

/// Returns the UI string for `key` in `language`.
///
/// Falls back to English when the key is untranslated, and to
/// `MISSING_KEY: <key>` when the key does not exist at all.
pub fn get_string(key: &str, language: Language) -> String {
    let localized = match language {
        Language::English => lookup(EN, key),
        Language::Chinese => lookup(ZH, key).or_else(|| lookup(EN, key)),
    };
    localized.map_or_else(|| format!("MISSING_KEY: {key}"), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lookup() {
        assert_eq!(
            get_string("prompt_saved_header", Language::English),
            "Your Saved Prompts"
        );
    }

    #[test]
    fn test_chinese_lookup() {
        assert_eq!(
            get_string("prompt_saved_header", Language::Chinese),
            "您已保存的提示词"
        );
    }

    #[test]
    fn test_untranslated_key_falls_back_to_english() {
        assert_eq!(
            get_string("header_markdown", Language::Chinese),
            get_string("header_markdown", Language::English)
        );
    }

    #[test]
    fn test_unknown_key_returns_sentinel() {
        assert_eq!(
            get_string("no_such_key", Language::English),
            "MISSING_KEY: no_such_key"
        );
        assert_eq!(
            get_string("no_such_key", Language::Chinese),
            "MISSING_KEY: no_such_key"
        );
    }

    #[test]
    fn test_language_serde_tags() {
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        assert_eq!(serde_json::to_string(&Language::Chinese).unwrap(), "\"zh\"");
        assert_eq!(Language::English.label(), "English");
        assert_eq!(Language::Chinese.label(), "中文");
    }
}
