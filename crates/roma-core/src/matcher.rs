//! Query-against-text matching.

use tracing::{debug, debug_span};

use crate::pattern::generate_all_romaji_patterns;
use crate::transliterate::Transliterator;

/// True if `query` (romaji, kana or kanji) matches somewhere in `target`.
///
/// A case-insensitive literal substring always matches. Otherwise the query
/// is romanized and compared against every expanded pattern of the target.
/// Empty query or empty target never match.
pub fn matches_japanese_text(
    t: &Transliterator<'_>,
    query: &str,
    target: &str,
    max_patterns: usize,
) -> bool {
    if query.is_empty() || target.is_empty() {
        return false;
    }
    let _span = debug_span!("matches", query, target).entered();

    let query_lower = query.to_lowercase();
    if target.to_lowercase().contains(&query_lower) {
        debug!("literal match");
        return true;
    }

    let romaji = t.to_romaji(query);
    if romaji.is_empty() {
        return false;
    }
    let found = generate_all_romaji_patterns(t, target, max_patterns)
        .iter()
        .any(|p| p.contains(&romaji));
    debug!(%romaji, found);
    found
}
