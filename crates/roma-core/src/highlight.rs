//! Match highlighting: wraps the part of a text that a query matched.
//!
//! The matched range of the winning romaji pattern is mapped back to source
//! characters through a [`RomajiMapping`](crate::pattern::RomajiMapping), so
//! `sujiwo` against `背筋を鍛える` marks `筋を`. When no pattern matches, every
//! case-insensitive literal occurrence of the query is marked instead.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use tracing::{debug, debug_span};

use crate::pattern::{expand_units, mapping_from_units, patterns_from_units};
use crate::transliterate::Transliterator;

pub const HIGHLIGHT_CLASS: &str = "japanese-search-highlight";
pub const MARK_CLOSE: &str = "</mark>";

/// Opening marker tag for `class`.
pub fn mark_open(class: &str) -> String {
    format!("<mark class=\"{class}\">")
}

/// A contiguous byte range of the highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub range: Range<usize>,
    pub highlighted: bool,
}

/// A text split into plain and highlighted runs.
///
/// Runs are contiguous, in order, and cover the whole text. Adjacent
/// highlighted ranges are merged, so every highlighted run is maximal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    text: String,
    runs: Vec<Run>,
}

impl Highlight {
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run {
                range: 0..text.len(),
                highlighted: false,
            }]
        };
        Self { text, runs }
    }

    fn from_ranges(text: String, ranges: impl IntoIterator<Item = Range<usize>>) -> Self {
        let mut sorted: Vec<Range<usize>> =
            ranges.into_iter().filter(|r| !r.is_empty()).collect();
        sorted.sort_by_key(|r| r.start);

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(sorted.len());
        for r in sorted {
            match merged.last_mut() {
                Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
                _ => merged.push(r),
            }
        }

        let (mut runs, pos) = merged.into_iter().fold(
            (Vec::new(), 0usize),
            |(mut runs, pos), r| {
                if r.start > pos {
                    runs.push(Run {
                        range: pos..r.start,
                        highlighted: false,
                    });
                }
                let end = r.end;
                runs.push(Run {
                    range: r,
                    highlighted: true,
                });
                (runs, end)
            },
        );
        if pos < text.len() {
            runs.push(Run {
                range: pos..text.len(),
                highlighted: false,
            });
        }
        Self { text, runs }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn is_highlighted(&self) -> bool {
        self.runs.iter().any(|r| r.highlighted)
    }

    /// Text of each highlighted run.
    pub fn marked(&self) -> impl Iterator<Item = &str> + '_ {
        self.runs
            .iter()
            .filter(|r| r.highlighted)
            .map(|r| &self.text[r.range.clone()])
    }

    /// Render with the default marker class and no escaping.
    pub fn render(&self) -> String {
        self.render_with(HIGHLIGHT_CLASS, str::to_string)
    }

    /// Render with `class` on the marker, passing every text run (never the
    /// marker tags) through `escape`.
    pub fn render_with(&self, class: &str, escape: impl Fn(&str) -> String) -> String {
        let open = mark_open(class);
        let mut out = String::with_capacity(self.text.len() + self.runs.len() * open.len());
        for run in &self.runs {
            let piece = escape(&self.text[run.range.clone()]);
            if run.highlighted {
                out.push_str(&open);
                out.push_str(&piece);
                out.push_str(MARK_CLOSE);
            } else {
                out.push_str(&piece);
            }
        }
        out
    }
}

fn mark_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<mark class="[^"<>]*">"#).expect("marker pattern must be valid")
    })
}

/// Remove marker tags left by a previous highlight pass.
fn strip_marks(text: &str) -> Cow<'_, str> {
    if !mark_tag().is_match(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(mark_tag().replace_all(text, "").replace(MARK_CLOSE, ""))
}

/// Highlight the first span of `text` that `query` matches.
///
/// Marker tags already present in `text` are removed first, so highlighting
/// rendered output again with the same query gives the same result.
pub fn highlight(
    t: &Transliterator<'_>,
    text: &str,
    query: &str,
    max_patterns: usize,
) -> Highlight {
    let text = strip_marks(text).into_owned();
    if text.is_empty() || query.is_empty() {
        return Highlight::plain(text);
    }
    let _span = debug_span!("highlight", query).entered();

    let romaji = t.to_romaji(query);
    let units = expand_units(t, &text);
    let patterns = patterns_from_units(&units, max_patterns);
    let hit = patterns
        .iter()
        .find_map(|p| p.find(romaji.as_str()).map(|start| (p, start)));

    if let Some((pattern, start)) = hit {
        let matched = start..start + romaji.len();
        if let Some(mapping) = mapping_from_units(&units, pattern) {
            let ranges: Vec<Range<usize>> = mapping
                .overlapping(matched.clone())
                .map(|u| u.bytes.clone())
                .collect();
            if !ranges.is_empty() {
                debug!(%pattern, ?matched, units = ranges.len(), "pattern highlight");
                return Highlight::from_ranges(text, ranges);
            }
        }
        debug!(%pattern, "pattern did not map back");
    }

    literal_highlight(text, query)
}

/// Case-insensitive highlight of every literal occurrence of `query`.
fn literal_highlight(text: String, query: &str) -> Highlight {
    let re = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            debug!(error = %e, "literal highlight skipped");
            return Highlight::plain(text);
        }
    };
    let ranges: Vec<Range<usize>> = re.find_iter(&text).map(|m| m.range()).collect();
    debug!(occurrences = ranges.len(), "literal highlight");
    Highlight::from_ranges(text, ranges)
}

/// [`highlight`] rendered with the default marker.
pub fn highlight_matches(
    t: &Transliterator<'_>,
    text: &str,
    query: &str,
    max_patterns: usize,
) -> String {
    highlight(t, text, query, max_patterns).render()
}
