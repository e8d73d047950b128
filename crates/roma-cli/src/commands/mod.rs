macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod dict_ops;
pub mod match_ops;
pub mod search_ops;

use std::fs;
use std::io;
use std::path::Path;

use roma_core::dict::{DictError, KanjiDictionary};
use roma_core::settings::{self, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("reading {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("dictionary: {0}")]
    Dict(#[from] DictError),
}

/// Process-wide options shared by every subcommand.
#[derive(Debug, Default, Clone)]
pub struct GlobalOptions {
    /// Compiled dictionary or KANJIDIC text replacing the embedded table.
    pub dict: Option<String>,
    /// Settings TOML replacing the embedded defaults.
    pub settings: Option<String>,
    /// Directory for the JSON trace log (`trace` feature).
    pub trace_dir: Option<String>,
}

/// Install the custom settings, dictionary and tracing before any command
/// touches the global engine.
pub fn setup(opts: &GlobalOptions) -> Result<(), SetupError> {
    if let Some(dir) = &opts.trace_dir {
        roma_core::trace_init::init_tracing(Path::new(dir));
    }
    if let Some(file) = &opts.settings {
        let content = fs::read_to_string(file).map_err(|source| SetupError::Io {
            path: file.clone(),
            source,
        })?;
        settings::init_custom(content)?;
    }
    if let Some(file) = &opts.dict {
        let dict = KanjiDictionary::load(Path::new(file))?;
        KanjiDictionary::init_custom(dict)?;
    }
    Ok(())
}

/// Minimal HTML escaping for text runs (never applied to marker tags).
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
