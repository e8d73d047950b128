//! Reading resolution: turns text units into romaji variant sets.

use tracing::debug;

use crate::dict::{KanjiDictionary, ReadingResolver};
use crate::romaji::{kana_to_romaji_variants, kana_units, KanaConverter, KanaUnit, WanaKana};

/// Kana converter plus kanji reading source.
///
/// Cheap to copy; holds only references to the two collaborators.
#[derive(Clone, Copy)]
pub struct Transliterator<'a> {
    kana: &'a dyn KanaConverter,
    kanji: &'a dyn ReadingResolver,
}

impl<'a> Transliterator<'a> {
    pub fn new(kana: &'a dyn KanaConverter, kanji: &'a dyn ReadingResolver) -> Self {
        Self { kana, kanji }
    }

    pub fn converter(&self) -> &'a dyn KanaConverter {
        self.kana
    }

    /// Romaji variants of a kana string (Hepburn, then kunrei when different).
    pub fn kana_variants(&self, kana: &str) -> Vec<String> {
        kana_to_romaji_variants(self.kana, kana)
    }

    /// Every romaji reading of one kanji, kun'yomi before on'yomi, deduplicated
    /// in insertion order. Empty when the resolver does not know the kanji.
    pub fn kanji_readings(&self, kanji: char) -> Vec<String> {
        let Some(details) = self.kanji.details(kanji) else {
            debug!(%kanji, "no readings");
            return Vec::new();
        };

        let mut readings: Vec<String> = Vec::new();
        let mut push_all = |variants: Vec<String>| {
            for v in variants {
                if !v.is_empty() && !readings.contains(&v) {
                    readings.push(v);
                }
            }
        };

        for reading in &details.kunyomi {
            let clean = strip_markers(reading);
            if !clean.is_empty() {
                push_all(self.kana_variants(&clean));
            }
        }
        for reading in &details.onyomi {
            let clean = strip_markers(reading);
            if !clean.is_empty() {
                let hiragana = self.kana.to_hiragana(&clean);
                push_all(self.kana_variants(&hiragana));
            }
        }
        readings
    }

    /// Variant set of one unit. Never empty: a kanji without readings, or a
    /// unit the converter maps to nothing, yields the literal unit text.
    pub fn unit_variants(&self, unit: &KanaUnit<'_>) -> Vec<String> {
        let variants = match unit.single_char() {
            Some(c) if unit.is_kanji() => self.kanji_readings(c),
            _ => self.kana_variants(unit.text),
        };
        if variants.iter().all(String::is_empty) {
            vec![unit.text.to_string()]
        } else {
            variants
        }
    }

    /// Single best-effort romanization of a query: the first reading of every
    /// kanji, Hepburn for everything else.
    pub fn to_romaji(&self, text: &str) -> String {
        if self.kana.is_romaji(text) {
            return text.to_lowercase();
        }

        let mut out = String::with_capacity(text.len());
        for unit in kana_units(text) {
            let romaji = match unit.single_char() {
                Some(c) if unit.is_kanji() => self.kanji_readings(c).into_iter().next(),
                _ => Some(self.kana.to_romaji(unit.text).to_lowercase()),
            };
            match romaji {
                Some(r) if !r.is_empty() => out.push_str(&r),
                _ => out.push_str(unit.text),
            }
        }
        out
    }
}

impl Transliterator<'static> {
    /// `wana_kana` conversion with the global kanji dictionary.
    pub fn global() -> Self {
        Self::new(WanaKana::global(), KanjiDictionary::global())
    }
}

/// Remove the dictionary notation markers that separate the okurigana
/// (`まな.ぶ`) or mark prefix/suffix readings (`-び`, `あら-`).
fn strip_markers(reading: &str) -> String {
    reading.chars().filter(|&c| c != '.' && c != '-').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_dict;

    #[test]
    fn test_kanji_readings_order() {
        let dict = test_dict();
        let t = Transliterator::new(&WanaKana, &dict);
        assert_eq!(
            t.kanji_readings('日'),
            vec!["hi", "bi", "ka", "nichi", "niti", "jitsu", "zitu"]
        );
        assert_eq!(t.kanji_readings('山'), vec!["yama", "san", "sen"]);
    }

    #[test]
    fn test_kanji_readings_strip_markers() {
        let dict = test_dict();
        let t = Transliterator::new(&WanaKana, &dict);
        assert_eq!(t.kanji_readings('学'), vec!["manabu", "gaku"]);
        assert_eq!(t.kanji_readings('鍛'), vec!["kitaeru", "tan"]);
    }

    #[test]
    fn test_kanji_readings_dedup() {
        let dict = test_dict();
        let t = Transliterator::new(&WanaKana, &dict);
        // な.み and なみ both romanize to "nami".
        let r = t.kanji_readings('並');
        assert_eq!(r.iter().filter(|v| *v == "nami").count(), 1);
    }

    #[test]
    fn test_unknown_kanji() {
        let dict = test_dict();
        let t = Transliterator::new(&WanaKana, &dict);
        assert!(t.kanji_readings('鬱').is_empty());
        let units = kana_units("鬱");
        assert_eq!(t.unit_variants(&units[0]), vec!["鬱"]);
    }

    #[test]
    fn test_unit_variants_kana() {
        let dict = test_dict();
        let t = Transliterator::new(&WanaKana, &dict);
        let units = kana_units("をきょ");
        assert_eq!(t.unit_variants(&units[0]), vec!["wo", "o"]);
        assert_eq!(t.unit_variants(&units[1]), vec!["kyo"]);
    }

    #[test]
    fn test_to_romaji_query() {
        let dict = test_dict();
        let t = Transliterator::new(&WanaKana, &dict);
        assert_eq!(t.to_romaji("yama"), "yama");
        assert_eq!(t.to_romaji("YaMa"), "yama");
        assert_eq!(t.to_romaji("やま"), "yama");
        assert_eq!(t.to_romaji("ヤマ"), "yama");
        assert_eq!(t.to_romaji("きょう"), "kyou");
        assert_eq!(t.to_romaji("山田"), "yamata");
        assert_eq!(t.to_romaji("鬱"), "鬱");
    }
}
