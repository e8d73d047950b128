use std::ops::Range;

use crate::unicode::{self, CharClass};

/// One romanization unit of a text: a kanji, a kana cluster, or any other
/// single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaUnit<'a> {
    pub text: &'a str,
    /// Character (not byte) indices of the unit in the source text.
    pub chars: Range<usize>,
    /// Byte offsets of the unit in the source text.
    pub bytes: Range<usize>,
    pub class: CharClass,
}

impl KanaUnit<'_> {
    pub fn is_kanji(&self) -> bool {
        self.class == CharClass::Kanji
    }

    /// The single character of a one-character unit.
    pub fn single_char(&self) -> Option<char> {
        let mut it = self.text.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Split `text` into romanization units.
///
/// Kana are grouped so that the converter sees what Hepburn treats as one
/// syllable: small glide kana join the preceding kana (きょ), a sokuon joins
/// the following cluster (っか) and prolonged sound marks join the preceding
/// cluster (らー). Everything else is one unit per character.
pub fn kana_units(text: &str) -> Vec<KanaUnit<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);
    let is_base_kana = |c: char| {
        unicode::is_kana(c)
            && !unicode::is_sokuon(c)
            && !unicode::is_small_glide(c)
            && !unicode::is_prolonged_mark(c)
    };

    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let start = i;
        let c = chars[i].1;
        let class = unicode::classify(c);
        i += 1;

        if matches!(class, CharClass::Hiragana | CharClass::Katakana) {
            if unicode::is_sokuon(c) {
                while i < chars.len() && unicode::is_sokuon(chars[i].1) {
                    i += 1;
                }
                if i < chars.len() && is_base_kana(chars[i].1) {
                    i += 1;
                }
            }
            while i < chars.len() && unicode::is_small_glide(chars[i].1) {
                i += 1;
            }
            while i < chars.len() && unicode::is_prolonged_mark(chars[i].1) {
                i += 1;
            }
        }

        let bytes = byte_at(start)..byte_at(i);
        units.push(KanaUnit {
            text: &text[bytes.clone()],
            chars: start..i,
            bytes,
            class,
        });
    }
    units
}
