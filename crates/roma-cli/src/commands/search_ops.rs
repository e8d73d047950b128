use std::fs;
use std::path::Path;

use roma_core::search::{render_suggestion, search, SearchDocument, SearchOptions};
use roma_core::settings::settings;
use roma_core::Transliterator;

/// Read `files` into documents. Unreadable files are reported and skipped.
pub fn load_documents(files: &[String]) -> Vec<SearchDocument> {
    let mut docs = Vec::with_capacity(files.len());
    for file in files {
        let path = Path::new(file);
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: skipping {file}: {e}");
                continue;
            }
        };
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.clone());
        docs.push(SearchDocument {
            name,
            path: file.clone(),
            content,
        });
    }
    docs
}

pub fn search_cmd(
    query: &str,
    files: &[String],
    content: bool,
    max_results: Option<usize>,
    json: bool,
) {
    let t = Transliterator::global();
    let mut opts = SearchOptions::from_settings(settings());
    opts.search_in_content |= content;
    if let Some(n) = max_results {
        opts.max_results = n;
    }

    let docs = load_documents(files);
    let results = search(&t, &docs, query, &opts);
    let rendered: Vec<_> = results
        .iter()
        .map(|doc| render_suggestion(&t, doc, query, &opts))
        .collect();

    if json {
        let out = die!(serde_json::to_string_pretty(&rendered), "Error: {}");
        println!("{out}");
        return;
    }

    for r in &rendered {
        println!("{}", r.name);
        println!("  {}", r.path);
        if let Some(preview) = &r.preview {
            println!("  {preview}");
        }
    }
    eprintln!("{} of {} document(s) matched", results.len(), docs.len());
}
