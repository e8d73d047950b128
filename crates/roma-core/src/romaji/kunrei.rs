/// Kunrei-shiki spelling for the kana whose Hepburn romanization differs.
///
/// Exact single-character lookup. Clusters such as しゃ are not covered and
/// keep their Hepburn spelling only.
pub fn kunrei_override(c: char) -> Option<&'static str> {
    match c {
        'し' | 'シ' => Some("si"),
        'ち' | 'チ' => Some("ti"),
        'つ' | 'ツ' => Some("tu"),
        'じ' | 'ジ' => Some("zi"),
        'ふ' | 'フ' => Some("hu"),
        'を' | 'ヲ' => Some("o"),
        'づ' | 'ヅ' => Some("du"),
        'ぢ' | 'ヂ' => Some("di"),
        _ => None,
    }
}
