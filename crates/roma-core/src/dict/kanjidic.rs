use std::collections::HashMap;

use super::{KanjiDictionary, KanjiReadings};
use crate::unicode;

/// Line counts from one KANJIDIC parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KanjidicStats {
    pub kanji: usize,
    pub readings: usize,
    pub skipped: usize,
}

/// Parse KANJIDIC-format text (one kanji per line).
///
/// Line format: `<kanji> <field codes...> <readings...> [T1 <nanori...>] {meaning}...`
///
/// - Lines starting with `#` or `＃` are comments.
/// - Tokens led by an ASCII character are field codes and are ignored.
/// - Katakana tokens are on'yomi, hiragana tokens are kun'yomi. A leading `-`
///   (suffix reading) does not affect classification.
/// - The line ends at the nanori marker (`T1`, `T2`) or the first `{`.
///
/// Lines whose first token is not a single kanji are skipped, never an error,
/// so that a full KANJIDIC file (which also lists some non-kanji symbols)
/// loads in one pass.
pub fn parse_kanjidic(text: &str) -> (KanjiDictionary, KanjidicStats) {
    let mut entries: HashMap<char, KanjiReadings> = HashMap::new();
    let mut stats = KanjidicStats::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('＃') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(kanji) = tokens.next().and_then(single_kanji) else {
            stats.skipped += 1;
            continue;
        };

        let readings = entries.entry(kanji).or_default();
        for token in tokens {
            if token.starts_with('{') || token == "T1" || token == "T2" {
                break;
            }
            let Some(first) = token.trim_start_matches('-').chars().next() else {
                continue;
            };
            if unicode::is_katakana(first) {
                readings.onyomi.push(token.to_string());
                stats.readings += 1;
            } else if unicode::is_hiragana(first) {
                readings.kunyomi.push(token.to_string());
                stats.readings += 1;
            }
        }
    }

    stats.kanji = entries.len();
    (KanjiDictionary::from_map(entries), stats)
}

fn single_kanji(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if unicode::is_kanji(c) => Some(c),
        _ => None,
    }
}
