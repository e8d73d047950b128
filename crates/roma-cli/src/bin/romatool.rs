use std::process;

use clap::{Parser, Subcommand};

use roma_cli::commands::{config_ops, dict_ops, match_ops, search_ops, setup, GlobalOptions};

#[derive(Parser)]
#[command(name = "romatool", about = "Romaji search over Japanese text")]
struct Cli {
    /// Kanji dictionary (compiled .rskd or KANJIDIC text) instead of the embedded table
    #[arg(long, global = true)]
    dict: Option<String>,
    /// Settings TOML file instead of the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSON trace log to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a query matches a text
    Match {
        /// Query (romaji, kana or kanji)
        query: String,
        /// Text to search in
        target: String,
    },
    /// Wrap the matched span of a text in the highlight marker
    Highlight {
        /// Text to highlight
        text: String,
        /// Query (romaji, kana or kanji)
        query: String,
        /// HTML-escape the text around the markers
        #[arg(long)]
        escape: bool,
    },
    /// List the romaji patterns generated for a text
    Patterns {
        /// Japanese text
        text: String,
        /// Maximum number of patterns (default: search.max_patterns)
        #[arg(short = 'n', long)]
        max: Option<usize>,
        /// Show the unit-to-romaji mapping of each pattern
        #[arg(long)]
        map: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show how a query is romanized and its script variants
    Romaji {
        /// Query text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the romaji variants of every unit of a text
    Readings {
        /// Japanese text
        text: String,
    },
    /// Search files by name, path and (optionally) content
    Search {
        /// Query (romaji, kana or kanji)
        query: String,
        /// Files to search
        files: Vec<String>,
        /// Also search the start of file contents
        #[arg(long)]
        content: bool,
        /// Maximum number of results (default: search.max_results)
        #[arg(short = 'n', long)]
        max_results: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build or inspect kanji dictionaries
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum DictAction {
    /// Compile a KANJIDIC text file (UTF-8) into the binary format
    Compile {
        /// KANJIDIC input file
        input_file: String,
        /// Output file
        output_file: String,
    },
    /// Show dictionary info (format auto-detected by magic bytes)
    Info {
        /// Compiled dictionary or KANJIDIC text file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let globals = GlobalOptions {
        dict: cli.dict,
        settings: cli.settings,
        trace_dir: cli.trace_dir,
    };
    if let Err(e) = setup(&globals) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    match cli.command {
        Command::Match { query, target } => match_ops::match_cmd(&query, &target),
        Command::Highlight {
            text,
            query,
            escape,
        } => match_ops::highlight_cmd(&text, &query, escape),
        Command::Patterns {
            text,
            max,
            map,
            json,
        } => match_ops::patterns_cmd(&text, max, map, json),
        Command::Romaji { text, json } => match_ops::romaji_cmd(&text, json),
        Command::Readings { text } => match_ops::readings_cmd(&text),
        Command::Search {
            query,
            files,
            content,
            max_results,
            json,
        } => search_ops::search_cmd(&query, &files, content, max_results, json),
        Command::Dict { action } => match action {
            DictAction::Compile {
                input_file,
                output_file,
            } => dict_ops::compile(&input_file, &output_file),
            DictAction::Info { file } => dict_ops::info(&file),
        },
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
