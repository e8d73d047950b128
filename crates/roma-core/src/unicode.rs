//! Character-level Unicode classification for Japanese text.

/// Script class of a single character, as used by the reading expander.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Hiragana,
    Katakana,
    Kanji,
    Other,
}

/// Classify one character. Total: every character falls into exactly one class.
pub fn classify(c: char) -> CharClass {
    if is_kanji(c) {
        CharClass::Kanji
    } else if is_hiragana(c) {
        CharClass::Hiragana
    } else if is_katakana(c) {
        CharClass::Katakana
    } else {
        CharClass::Other
    }
}

/// Full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Full Katakana block (U+30A0..U+30FF), including the prolonged sound mark ー.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs up to U+9FAF plus Extension A.
///
/// The upper bound stops short of the block end (U+9FFF) so that the recently
/// assigned ideographs no dictionary carries readings for are classified as
/// `Other` and pass through literally.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FAF}').contains(&c) || ('\u{3400}'..='\u{4DBF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Small glide kana that combine with the preceding kana (yōon and extended
/// katakana such as ファ or ティ).
pub fn is_small_glide(c: char) -> bool {
    matches!(
        c,
        'ゃ' | 'ゅ'
            | 'ょ'
            | 'ぁ'
            | 'ぃ'
            | 'ぅ'
            | 'ぇ'
            | 'ぉ'
            | 'ゎ'
            | 'ャ'
            | 'ュ'
            | 'ョ'
            | 'ァ'
            | 'ィ'
            | 'ゥ'
            | 'ェ'
            | 'ォ'
            | 'ヮ'
    )
}

/// Small tsu (sokuon), which geminates the following consonant.
pub fn is_sokuon(c: char) -> bool {
    matches!(c, 'っ' | 'ッ')
}

/// Prolonged sound mark, which lengthens the preceding vowel.
pub fn is_prolonged_mark(c: char) -> bool {
    c == 'ー'
}

/// CJK symbols and punctuation (、。「」 etc.) and the full-width forms block.
fn is_japanese_punctuation(c: char) -> bool {
    ('\u{3000}'..='\u{303F}').contains(&c) || ('\u{FF00}'..='\u{FFEF}').contains(&c)
}

/// True if every character is kana, kanji or Japanese punctuation.
pub fn is_japanese_str(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| is_kana(c) || is_kanji(c) || is_japanese_punctuation(c))
}

/// True if every character is ASCII or a Hepburn macron vowel.
pub fn is_romaji_str(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii()
                || matches!(
                    c,
                    'ā' | 'ī' | 'ū' | 'ē' | 'ō' | 'Ā' | 'Ī' | 'Ū' | 'Ē' | 'Ō'
                )
        })
}
