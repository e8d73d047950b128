use std::collections::HashSet;
use std::ops::Range;

use super::{expand_units, ExpandedUnit};
use crate::transliterate::Transliterator;

/// Where one unit of the source text lands in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMapping {
    /// Byte range in the pattern string.
    pub romaji: Range<usize>,
    /// Character indices in the source text.
    pub chars: Range<usize>,
    /// Byte range in the source text.
    pub bytes: Range<usize>,
}

/// Unit-by-unit alignment of a source text with one of its patterns.
///
/// Romaji ranges are contiguous, non-overlapping, in source order, and cover
/// the whole pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomajiMapping {
    pub romaji: String,
    pub units: Vec<UnitMapping>,
}

impl RomajiMapping {
    /// Units whose romaji range overlaps `range` (open-interval overlap).
    pub fn overlapping(&self, range: Range<usize>) -> impl Iterator<Item = &UnitMapping> + '_ {
        self.units
            .iter()
            .filter(move |m| m.romaji.start < range.end && m.romaji.end > range.start)
    }
}

/// Align `text` with `pattern`, one of its generated patterns.
///
/// Returns `None` if no choice of variants reproduces `pattern` exactly.
pub fn map_to_pattern(t: &Transliterator<'_>, text: &str, pattern: &str) -> Option<RomajiMapping> {
    let units = expand_units(t, text);
    mapping_from_units(&units, pattern)
}

/// For each unit, take the first variant (in expansion order) that is a prefix
/// of what remains of the pattern. A shorter variant can be a prefix without
/// being the one the pattern was built from (`se` vs `sei`), so dead ends
/// backtrack; `(unit, offset)` states already known to fail are not revisited.
pub(crate) fn mapping_from_units(
    units: &[ExpandedUnit<'_>],
    pattern: &str,
) -> Option<RomajiMapping> {
    let n = units.len();
    // offsets[i] is where unit i starts in the pattern; offsets[n] is the end.
    let mut offsets = vec![0usize; n + 1];
    let mut next_choice = vec![0usize; n + 1];
    let mut dead: HashSet<(usize, usize)> = HashSet::new();
    let mut i = 0;

    loop {
        if i == n {
            if offsets[n] == pattern.len() {
                break;
            }
            dead.insert((n, offsets[n]));
            i = n.checked_sub(1)?;
            continue;
        }

        let pos = offsets[i];
        let rest = &pattern[pos..];
        let variants = &units[i].variants;
        let mut advanced = false;
        while next_choice[i] < variants.len() {
            let v = &variants[next_choice[i]];
            next_choice[i] += 1;
            let end = pos + v.len();
            if rest.starts_with(v.as_str()) && !dead.contains(&(i + 1, end)) {
                offsets[i + 1] = end;
                advanced = true;
                break;
            }
        }

        if advanced {
            i += 1;
            next_choice[i] = 0;
        } else {
            dead.insert((i, pos));
            next_choice[i] = 0;
            i = i.checked_sub(1)?;
        }
    }

    let mapped = units
        .iter()
        .enumerate()
        .map(|(i, u)| UnitMapping {
            romaji: offsets[i]..offsets[i + 1],
            chars: u.unit.chars.clone(),
            bytes: u.unit.bytes.clone(),
        })
        .collect();
    Some(RomajiMapping {
        romaji: pattern.to_string(),
        units: mapped,
    })
}
