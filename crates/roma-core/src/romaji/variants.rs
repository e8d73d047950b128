use super::{kana_units, kunrei_override, KanaConverter};

/// All romaji spellings of a kana string: Hepburn first, then the kunrei-shiki
/// spelling when it differs.
///
/// The kunrei candidate is assembled unit by unit: a unit that is a single
/// character in the override table takes its kunrei spelling, every other unit
/// goes through the converter. At most two variants are returned, never
/// duplicates, and never an empty list for non-empty input.
pub fn kana_to_romaji_variants(conv: &dyn KanaConverter, kana: &str) -> Vec<String> {
    let hepburn = conv.to_romaji(kana).to_lowercase();

    let mut kunrei = String::with_capacity(hepburn.len());
    let mut substituted = false;
    for unit in kana_units(kana) {
        match unit.single_char().and_then(kunrei_override) {
            Some(spelling) => {
                kunrei.push_str(spelling);
                substituted = true;
            }
            None => kunrei.push_str(&conv.to_romaji(unit.text).to_lowercase()),
        }
    }

    let mut variants = vec![hepburn];
    if substituted && kunrei != variants[0] {
        variants.push(kunrei);
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romaji::WanaKana;

    fn variants(kana: &str) -> Vec<String> {
        kana_to_romaji_variants(&WanaKana, kana)
    }

    #[test]
    fn test_hepburn_and_kunrei() {
        assert_eq!(variants("し"), vec!["shi", "si"]);
        assert_eq!(variants("ち"), vec!["chi", "ti"]);
        assert_eq!(variants("つ"), vec!["tsu", "tu"]);
        assert_eq!(variants("じ"), vec!["ji", "zi"]);
        assert_eq!(variants("ふ"), vec!["fu", "hu"]);
        assert_eq!(variants("を"), vec!["wo", "o"]);
    }

    #[test]
    fn test_katakana_overrides() {
        assert_eq!(variants("シ"), vec!["shi", "si"]);
        assert_eq!(variants("ツ"), vec!["tsu", "tu"]);
    }

    #[test]
    fn test_no_kunrei_difference() {
        assert_eq!(variants("や"), vec!["ya"]);
        assert_eq!(variants("すじ").len(), 2);
        assert_eq!(variants("かさ"), vec!["kasa"]);
    }

    #[test]
    fn test_multi_character_reading() {
        assert_eq!(variants("しんぶん"), vec!["shinbun", "sinbun"]);
        assert_eq!(variants("つき"), vec!["tsuki", "tuki"]);
        assert_eq!(variants("あたらしい"), vec!["atarashii", "atarasii"]);
    }

    #[test]
    fn test_yoon_cluster_keeps_hepburn() {
        // じゃ is a cluster, not the single table character じ.
        assert_eq!(variants("じゃ"), vec!["ja"]);
        assert_eq!(variants("しょう"), vec!["shou"]);
    }
}
