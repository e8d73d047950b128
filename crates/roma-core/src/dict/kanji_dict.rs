use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::kanjidic::{parse_kanjidic, KanjidicStats};
use super::{DictError, KanjiReadings, ReadingResolver};

const MAGIC: &[u8; 4] = b"RSKD";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5; // 4 bytes magic + 1 byte version

/// Core kanji table bundled with the crate, in KANJIDIC line format.
pub const EMBEDDED_KANJIDIC: &str = include_str!("kanjidic_core.txt");

static INSTANCE: OnceLock<KanjiDictionary> = OnceLock::new();

/// In-memory kanji → readings table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KanjiDictionary {
    entries: HashMap<char, KanjiReadings>,
}

impl KanjiDictionary {
    pub fn from_entries(entries: impl IntoIterator<Item = (char, KanjiReadings)>) -> Self {
        let mut map: HashMap<char, KanjiReadings> = HashMap::new();
        for (kanji, readings) in entries {
            let slot = map.entry(kanji).or_default();
            slot.kunyomi.extend(readings.kunyomi);
            slot.onyomi.extend(readings.onyomi);
        }
        Self::from_map(map)
    }

    pub(super) fn from_map(entries: HashMap<char, KanjiReadings>) -> Self {
        Self { entries }
    }

    /// Parse the bundled core table.
    pub fn embedded() -> Self {
        parse_kanjidic(EMBEDDED_KANJIDIC).0
    }

    /// Load a KANJIDIC text file (UTF-8).
    pub fn from_kanjidic_file(path: &Path) -> Result<(Self, KanjidicStats), DictError> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            DictError::Parse(format!(
                "{} is not UTF-8 (convert EUC-JP KANJIDIC first): {e}",
                path.display()
            ))
        })?;
        Ok(parse_kanjidic(&text))
    }

    /// Load a compiled dictionary or a KANJIDIC text file, detected by the
    /// magic bytes.
    pub fn load(path: &Path) -> Result<Self, DictError> {
        let mut magic = [0u8; 4];
        let n = File::open(path)?.read(&mut magic)?;
        if Self::is_compiled(&magic[..n]) {
            Self::open(path)
        } else {
            Ok(Self::from_kanjidic_file(path)?.0)
        }
    }

    /// Install a dictionary as the process-wide default before first `global()` call.
    pub fn init_custom(dict: KanjiDictionary) -> Result<(), DictError> {
        INSTANCE.set(dict).map_err(|_| DictError::AlreadyInitialized)
    }

    /// Get or initialize the global dictionary: the custom one if installed,
    /// the embedded core table otherwise.
    pub fn global() -> &'static KanjiDictionary {
        INSTANCE.get_or_init(|| {
            let dict = Self::embedded();
            debug!(kanji = dict.len(), "loaded embedded kanji dictionary");
            dict
        })
    }

    pub fn get(&self, kanji: char) -> Option<&KanjiReadings> {
        self.entries.get(&kanji)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns (kanji_count, reading_count).
    pub fn stats(&self) -> (usize, usize) {
        let readings = self.entries.values().map(KanjiReadings::len).sum();
        (self.entries.len(), readings)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let encoded = bincode::serialize(self).map_err(DictError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_SIZE + encoded.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&encoded);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)
    }

    /// Open a compiled dictionary file.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The map is dropped before returning; the result owns its data.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }

    /// True if the bytes start with the compiled-dictionary magic.
    pub fn is_compiled(data: &[u8]) -> bool {
        data.len() >= 4 && &data[..4] == MAGIC
    }
}

impl ReadingResolver for KanjiDictionary {
    fn details(&self, kanji: char) -> Option<KanjiReadings> {
        self.entries
            .get(&kanji)
            .filter(|r| !r.is_empty())
            .cloned()
    }
}
