//! Document search and suggestion rendering for a file picker.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::highlight::{highlight, Highlight, HIGHLIGHT_CLASS};
use crate::matcher::matches_japanese_text;
use crate::pattern::DEFAULT_MAX_PATTERNS;
use crate::romaji::KanaConverter;
use crate::settings::Settings;
use crate::transliterate::Transliterator;

/// A searchable document supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub max_patterns: usize,
    pub max_results: usize,
    pub search_in_content: bool,
    pub content_preview_chars: usize,
    pub preview_chars: usize,
    pub class: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_patterns: DEFAULT_MAX_PATTERNS,
            max_results: 50,
            search_in_content: false,
            content_preview_chars: 1000,
            preview_chars: 100,
            class: HIGHLIGHT_CLASS.to_string(),
        }
    }
}

impl SearchOptions {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            max_patterns: s.search.max_patterns,
            max_results: s.search.max_results,
            search_in_content: s.search.search_in_content,
            content_preview_chars: s.search.content_preview_chars,
            preview_chars: s.highlight.preview_chars,
            class: s.highlight.class.clone(),
        }
    }
}

/// Documents matching `query`, in input order, at most `max_results`.
///
/// Name is tried first, then path, then (only with `search_in_content`) the
/// first `content_preview_chars` characters of the body. An empty query
/// returns the leading documents unfiltered; a blank one returns nothing.
pub fn search<'d>(
    t: &Transliterator<'_>,
    documents: &'d [SearchDocument],
    query: &str,
    opts: &SearchOptions,
) -> Vec<&'d SearchDocument> {
    if query.is_empty() {
        return documents.iter().take(opts.max_results).collect();
    }
    if query.trim().is_empty() {
        return Vec::new();
    }
    let _span = debug_span!("search", query, documents = documents.len()).entered();

    let hit = |target: &str| matches_japanese_text(t, query, target, opts.max_patterns);
    let results: Vec<&SearchDocument> = documents
        .iter()
        .filter(|doc| {
            hit(&doc.name)
                || hit(&doc.path)
                || (opts.search_in_content
                    && hit(char_prefix(&doc.content, opts.content_preview_chars)))
        })
        .take(opts.max_results)
        .collect();
    debug!(results = results.len());
    results
}

/// Highlighted fields of one search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: Highlight,
    pub path: Highlight,
    /// Start of the body with newlines flattened, when content search is on.
    pub preview: Option<Highlight>,
    /// The body is longer than the preview.
    pub truncated: bool,
}

/// A [`Suggestion`] rendered to marked-up strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSuggestion {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl Suggestion {
    pub fn render_with(&self, class: &str, escape: impl Fn(&str) -> String) -> RenderedSuggestion {
        let preview = self.preview.as_ref().map(|p| {
            let mut s = p.render_with(class, &escape);
            if self.truncated {
                s.push_str("...");
            }
            s
        });
        RenderedSuggestion {
            name: self.name.render_with(class, &escape),
            path: self.path.render_with(class, &escape),
            preview,
        }
    }
}

pub fn suggest(
    t: &Transliterator<'_>,
    doc: &SearchDocument,
    query: &str,
    opts: &SearchOptions,
) -> Suggestion {
    let mut preview = None;
    let mut truncated = false;
    if opts.search_in_content {
        let head = char_prefix(&doc.content, opts.preview_chars);
        truncated = head.len() < doc.content.len();
        let flat = head.replace('\n', " ");
        if !flat.is_empty() {
            preview = Some(highlight(t, &flat, query, opts.max_patterns));
        }
    }
    Suggestion {
        name: highlight(t, &doc.name, query, opts.max_patterns),
        path: highlight(t, &doc.path, query, opts.max_patterns),
        preview,
        truncated,
    }
}

/// [`suggest`] rendered with the configured class and no escaping.
pub fn render_suggestion(
    t: &Transliterator<'_>,
    doc: &SearchDocument,
    query: &str,
    opts: &SearchOptions,
) -> RenderedSuggestion {
    suggest(t, doc, query, opts).render_with(&opts.class, str::to_string)
}

/// Script variants of a query as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchVariants {
    pub original: String,
    pub hiragana: String,
    pub katakana: String,
    pub romaji: String,
}

pub fn search_variants(conv: &dyn KanaConverter, input: &str) -> SearchVariants {
    let trimmed = input.trim();
    SearchVariants {
        original: trimmed.to_string(),
        hiragana: conv.to_hiragana(trimmed),
        katakana: conv.to_katakana(trimmed),
        romaji: conv.to_romaji(trimmed),
    }
}

/// Distinct non-blank variants of `input`, original first.
pub fn search_terms(conv: &dyn KanaConverter, input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let v = search_variants(conv, input);
    let mut terms: Vec<String> = Vec::with_capacity(4);
    for term in [v.original, v.hiragana, v.katakana, v.romaji] {
        if !term.trim().is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// The first `n` characters of `s`.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
