//! Kana-to-romaji conversion.
//!
//! The Hepburn conversion itself is delegated to a [`KanaConverter`]; this
//! module adds what the converter does not know about: kana clustering,
//! the kunrei-shiki override table and per-unit variant generation.

mod kunrei;
mod units;
mod variants;

pub use kunrei::kunrei_override;
pub use units::{kana_units, KanaUnit};
pub use variants::kana_to_romaji_variants;

use wana_kana::ConvertJapanese;

use crate::unicode;

/// Kana conversion and script detection, consumed as a black box.
///
/// Implementations must be total and pure: every input yields an output and
/// the same input always yields the same output.
pub trait KanaConverter: Send + Sync {
    /// Hepburn romanization. Callers lowercase the result.
    fn to_romaji(&self, text: &str) -> String;
    fn to_hiragana(&self, text: &str) -> String;
    fn to_katakana(&self, text: &str) -> String;
    fn is_japanese(&self, text: &str) -> bool;
    fn is_romaji(&self, text: &str) -> bool;
}

/// [`KanaConverter`] backed by the `wana_kana` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct WanaKana;

impl WanaKana {
    /// Shared instance for the process-wide default engine.
    pub fn global() -> &'static WanaKana {
        static INSTANCE: WanaKana = WanaKana;
        &INSTANCE
    }
}

impl KanaConverter for WanaKana {
    fn to_romaji(&self, text: &str) -> String {
        text.to_romaji()
    }

    fn to_hiragana(&self, text: &str) -> String {
        text.to_hiragana()
    }

    fn to_katakana(&self, text: &str) -> String {
        text.to_katakana()
    }

    fn is_japanese(&self, text: &str) -> bool {
        unicode::is_japanese_str(text)
    }

    fn is_romaji(&self, text: &str) -> bool {
        unicode::is_romaji_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wanakana_hepburn() {
        let conv = WanaKana;
        assert_eq!(conv.to_romaji("やま"), "yama");
        assert_eq!(conv.to_romaji("しんぶん"), "shinbun");
        assert_eq!(conv.to_romaji("ヤマ").to_lowercase(), "yama");
        assert_eq!(conv.to_romaji("きょう"), "kyou");
    }

    #[test]
    fn test_wanakana_script_conversion() {
        let conv = WanaKana;
        assert_eq!(conv.to_hiragana("サン"), "さん");
        assert_eq!(conv.to_katakana("さん"), "サン");
    }

    #[test]
    fn test_wanakana_detection() {
        let conv = WanaKana;
        assert!(conv.is_japanese("山登り"));
        assert!(!conv.is_japanese("yama"));
        assert!(conv.is_romaji("yama"));
        assert!(!conv.is_romaji("やま"));
    }
}
