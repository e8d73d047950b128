use std::fs;

pub fn settings_export() {
    print!("{}", roma_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        roma_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: search.max_patterns={}, search.max_results={}, search.search_in_content={}, highlight.class={}",
        s.search.max_patterns, s.search.max_results, s.search.search_in_content, s.highlight.class
    );
}
