pub mod dict;
pub mod highlight;
pub mod matcher;
pub mod pattern;
pub mod romaji;
pub mod search;
pub mod settings;
pub mod trace_init;
pub mod transliterate;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testutil;

pub use highlight::{Highlight, Run};
pub use transliterate::Transliterator;

/// [`matcher::matches_japanese_text`] with the global dictionary and settings.
pub fn matches_japanese_text(query: &str, target: &str) -> bool {
    matcher::matches_japanese_text(
        &Transliterator::global(),
        query,
        target,
        settings::settings().search.max_patterns,
    )
}

/// [`highlight::highlight`] with the global dictionary and settings, rendered
/// with the configured marker class.
pub fn highlight_matches(text: &str, query: &str) -> String {
    let s = settings::settings();
    highlight::highlight(&Transliterator::global(), text, query, s.search.max_patterns)
        .render_with(&s.highlight.class, str::to_string)
}

/// [`pattern::generate_all_romaji_patterns`] with the global dictionary.
pub fn generate_all_romaji_patterns(text: &str, max_patterns: usize) -> Vec<String> {
    pattern::generate_all_romaji_patterns(&Transliterator::global(), text, max_patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_engine() {
        assert!(matches_japanese_text("yama", "山"));
        assert!(matches_japanese_text("gakukou", "学校"));
        assert!(!matches_japanese_text("", "山"));
        assert_eq!(
            highlight_matches("私の山登り日記", "yama"),
            "私の<mark class=\"japanese-search-highlight\">山</mark>登り日記"
        );
        assert!(generate_all_romaji_patterns("学校", 100).contains(&"gakukou".to_string()));
    }
}
