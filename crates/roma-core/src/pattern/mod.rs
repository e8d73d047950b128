//! Bounded expansion of a text into complete romaji patterns.
//!
//! A pattern picks one variant per unit and concatenates them. The full space
//! is the Cartesian product of all variant sets, so expansion proceeds left to
//! right and stops extending a step as soon as `max_patterns` partial patterns
//! exist. Combinations built from earlier variants win; the rest are dropped.

mod mapping;
#[cfg(test)]
mod tests;

pub use mapping::{map_to_pattern, RomajiMapping, UnitMapping};
pub(crate) use mapping::mapping_from_units;

use tracing::{debug, debug_span};

use crate::romaji::{kana_units, KanaUnit};
use crate::transliterate::Transliterator;

pub const DEFAULT_MAX_PATTERNS: usize = 100;

/// A unit of the source text with its romaji variant set.
pub(crate) struct ExpandedUnit<'a> {
    pub unit: KanaUnit<'a>,
    pub variants: Vec<String>,
}

pub(crate) fn expand_units<'a>(t: &Transliterator<'_>, text: &'a str) -> Vec<ExpandedUnit<'a>> {
    kana_units(text)
        .into_iter()
        .map(|unit| {
            let variants = t.unit_variants(&unit);
            ExpandedUnit { unit, variants }
        })
        .collect()
}

/// All romaji patterns of `text`, at most `max_patterns` of them, in
/// expansion order. Empty patterns are dropped.
pub fn generate_all_romaji_patterns(
    t: &Transliterator<'_>,
    text: &str,
    max_patterns: usize,
) -> Vec<String> {
    let units = expand_units(t, text);
    patterns_from_units(&units, max_patterns)
}

pub(crate) fn patterns_from_units(units: &[ExpandedUnit<'_>], max_patterns: usize) -> Vec<String> {
    let _span = debug_span!("generate_patterns", units = units.len(), max_patterns).entered();
    if max_patterns == 0 {
        return Vec::new();
    }

    let mut patterns = vec![String::new()];
    let mut capped = false;
    for expanded in units {
        if let [only] = expanded.variants.as_slice() {
            for p in &mut patterns {
                p.push_str(only);
            }
            continue;
        }

        let mut next = Vec::with_capacity(
            patterns
                .len()
                .saturating_mul(expanded.variants.len())
                .min(max_patterns),
        );
        'fill: for prefix in &patterns {
            for variant in &expanded.variants {
                if next.len() >= max_patterns {
                    capped = true;
                    break 'fill;
                }
                let mut p = String::with_capacity(prefix.len() + variant.len());
                p.push_str(prefix);
                p.push_str(variant);
                next.push(p);
            }
        }
        patterns = next;
    }

    patterns.retain(|p| !p.is_empty());
    debug!(patterns = patterns.len(), capped);
    patterns
}
