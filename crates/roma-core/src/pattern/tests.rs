use proptest::prelude::*;

use super::*;
use crate::testutil::{test_dict, with_test_translit};
use crate::romaji::WanaKana;

fn patterns(text: &str, max: usize) -> Vec<String> {
    with_test_translit(|t| generate_all_romaji_patterns(t, text, max))
}

#[test]
fn test_kana_only() {
    assert_eq!(patterns("やま", 100), vec!["yama"]);
    assert_eq!(patterns("ヤマ", 100), vec!["yama"]);
    assert_eq!(patterns("しんぶん", 100), vec!["shinbun", "sinbun"]);
    assert_eq!(patterns("きょう", 100), vec!["kyou"]);
}

#[test]
fn test_kanji_compound() {
    let p = patterns("日本", 100);
    assert_eq!(p.len(), 14);
    assert_eq!(p[0], "himoto");
    assert_eq!(p[1], "hihon");
    assert!(p.iter().any(|s| s == "nichihon"));
    assert!(!p.iter().any(|s| s.contains("nippon")));
}

#[test]
fn test_mixed_text() {
    let p = patterns("背筋を鍛える", 100);
    // 背 5 × 筋 2 × を 2 × 鍛 2
    assert_eq!(p.len(), 40);
    assert_eq!(p[0], "sesujiwokitaerueru");
    assert!(p.iter().any(|s| s.starts_with("haikinwokitaeru")));
}

#[test]
fn test_truncates_as_it_goes() {
    // 生 has 14 readings: 196 combinations, the first 100 are kept.
    let p = patterns("生生", 100);
    assert_eq!(p.len(), 100);
    assert_eq!(p[0], "ikiruikiru");
    assert_eq!(p[99], "hayasuikasu");
    assert!(!p.iter().any(|s| s.starts_with("sei")));
}

#[test]
fn test_small_cap() {
    let p = patterns("生上下", 5);
    assert_eq!(p.len(), 5);
    assert!(p.iter().all(|s| s.starts_with("ikiru")));
}

#[test]
fn test_unknown_kanji_passthrough() {
    assert_eq!(patterns("鬱山", 100), vec!["鬱yama", "鬱san", "鬱sen"]);
    assert_eq!(patterns("鬱", 100), vec!["鬱"]);
}

#[test]
fn test_ascii_lowercased() {
    assert_eq!(patterns("Ab 1", 100), vec!["ab 1"]);
}

#[test]
fn test_empty_and_zero_cap() {
    assert!(patterns("", 100).is_empty());
    assert!(patterns("山", 0).is_empty());
    assert!(patterns("やま", 0).is_empty());
}

#[test]
fn test_mapping_mixed_text() {
    with_test_translit(|t| {
        let pattern = "sesujiwokitaerueruhakobuugoku";
        let m = map_to_pattern(t, "背筋を鍛える運動", pattern).unwrap();
        assert_eq!(m.romaji, pattern);
        assert_eq!(m.units.len(), 8);
        assert_eq!(m.units[0].romaji, 0..2);
        assert_eq!(m.units[1].romaji, 2..6);
        assert_eq!(m.units[2].romaji, 6..8);
        assert_eq!(m.units[2].chars, 2..3);
        assert_eq!(m.units[7].romaji.end, pattern.len());

        let hit: Vec<_> = m.overlapping(2..8).map(|u| u.chars.clone()).collect();
        assert_eq!(hit, vec![1..2, 2..3]);
    });
}

#[test]
fn test_mapping_backtracks_past_shorter_prefix() {
    with_test_translit(|t| {
        // "se" is a prefix of "sei" but leaves "iikiru", which 生 cannot start.
        let m = map_to_pattern(t, "背生", "seiikiru").unwrap();
        assert_eq!(m.units[0].romaji, 0..3);
        assert_eq!(m.units[1].romaji, 3..8);
    });
}

#[test]
fn test_mapping_kana_clusters() {
    with_test_translit(|t| {
        let m = map_to_pattern(t, "がっこう", "gakkou").unwrap();
        assert_eq!(m.units.len(), 3);
        assert_eq!(m.units[1].chars, 1..3);
        assert_eq!(m.units[1].romaji, 2..5);
    });
}

#[test]
fn test_mapping_rejects_foreign_pattern() {
    with_test_translit(|t| {
        assert!(map_to_pattern(t, "山", "kawa").is_none());
        assert!(map_to_pattern(t, "山", "yamax").is_none());
        assert!(map_to_pattern(t, "", "").is_some());
    });
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            '日', '本', '山', '背', '筋', '生', 'を', 'し', 'ち', 'き', 'ょ', 'っ', 'か', 'a', 'ー',
            '鬱', ' ',
        ]),
        0..7,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_cap_is_respected(
        text in prop::collection::vec(prop::sample::select(vec!['生', '上', '下', '日']), 1..6)
            .prop_map(|c| c.into_iter().collect::<String>()),
        max in 1usize..60,
    ) {
        let p = patterns(&text, max);
        prop_assert!(p.len() <= max);
        prop_assert!(!p.is_empty());
    }

    #[test]
    fn prop_every_pattern_maps_back(text in arb_text()) {
        let dict = test_dict();
        let t = Transliterator::new(&WanaKana, &dict);
        let char_count = text.chars().count();
        for pattern in generate_all_romaji_patterns(&t, &text, 20) {
            let m = map_to_pattern(&t, &text, &pattern);
            prop_assert!(m.is_some(), "no mapping for {pattern:?} of {text:?}");
            let m = m.unwrap();
            let mut romaji_pos = 0;
            let mut char_pos = 0;
            for u in &m.units {
                prop_assert_eq!(u.romaji.start, romaji_pos);
                prop_assert_eq!(u.chars.start, char_pos);
                romaji_pos = u.romaji.end;
                char_pos = u.chars.end;
            }
            prop_assert_eq!(romaji_pos, pattern.len());
            prop_assert_eq!(char_pos, char_count);
        }
    }
}
