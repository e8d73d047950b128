//! Kanji reading storage.
//!
//! `KanjiDictionary` maps a kanji to its kun'yomi and on'yomi lists as they
//! appear in KANJIDIC (kana, with `.`/`-` notation markers intact). It is the
//! default [`ReadingResolver`]; hosts with their own reading data implement
//! the trait directly.

mod kanji_dict;
mod kanjidic;

pub use kanji_dict::KanjiDictionary;
pub use kanjidic::{parse_kanjidic, KanjidicStats};

use std::io;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected RSKD)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("kanji dictionary already initialized")]
    AlreadyInitialized,
}

/// Dictionary readings of one kanji.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiReadings {
    /// Native readings in hiragana, e.g. `まな.ぶ`, `-び`.
    pub kunyomi: Vec<String>,
    /// Borrowed readings, conventionally katakana, e.g. `ガク`.
    pub onyomi: Vec<String>,
}

impl KanjiReadings {
    pub fn is_empty(&self) -> bool {
        self.kunyomi.is_empty() && self.onyomi.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kunyomi.len() + self.onyomi.len()
    }
}

/// Source of kanji readings.
///
/// `None` means the character is unknown; callers then treat it literally.
/// Implementations must not panic on unknown or malformed input.
pub trait ReadingResolver: Send + Sync {
    fn details(&self, kanji: char) -> Option<KanjiReadings>;
}
