use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use roma_core::dict::{KanjiDictionary, ReadingResolver};
use roma_core::highlight::highlight;
use roma_core::matcher::matches_japanese_text;
use roma_core::pattern::{generate_all_romaji_patterns, map_to_pattern};
use roma_core::romaji::{kana_units, KanaConverter};
use roma_core::search::{search_variants, SearchVariants};
use roma_core::settings::settings;
use roma_core::Transliterator;

use super::escape_html;

pub fn match_cmd(query: &str, target: &str) {
    let t = Transliterator::global();
    let matched = matches_japanese_text(&t, query, target, settings().search.max_patterns);
    println!("{}", if matched { "match" } else { "no match" });
}

pub fn highlight_cmd(text: &str, query: &str, escape: bool) {
    let t = Transliterator::global();
    let s = settings();
    let h = highlight(&t, text, query, s.search.max_patterns);
    let rendered = if escape {
        h.render_with(&s.highlight.class, escape_html)
    } else {
        h.render_with(&s.highlight.class, str::to_string)
    };
    println!("{rendered}");
}

#[derive(Serialize)]
struct PatternReport<'a> {
    text: &'a str,
    max_patterns: usize,
    patterns: &'a [String],
}

pub fn patterns_cmd(text: &str, max: Option<usize>, map: bool, json: bool) {
    let t = Transliterator::global();
    let max_patterns = max.unwrap_or(settings().search.max_patterns);
    let patterns = generate_all_romaji_patterns(&t, text, max_patterns);

    if json {
        let report = PatternReport {
            text,
            max_patterns,
            patterns: &patterns,
        };
        let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{out}");
        return;
    }

    for pattern in &patterns {
        println!("{pattern}");
        if !map {
            continue;
        }
        if let Some(mapping) = map_to_pattern(&t, text, pattern) {
            for unit in &mapping.units {
                println!(
                    "    {}  -> {}",
                    &text[unit.bytes.clone()],
                    &pattern[unit.romaji.clone()]
                );
            }
        }
    }
    eprintln!("{} pattern(s), max {max_patterns}", patterns.len());
}

#[derive(Serialize)]
struct RomajiReport {
    query_romaji: String,
    is_japanese: bool,
    is_romaji: bool,
    #[serde(flatten)]
    variants: SearchVariants,
}

pub fn romaji_cmd(text: &str, json: bool) {
    let t = Transliterator::global();
    let conv = t.converter();
    let report = RomajiReport {
        query_romaji: t.to_romaji(text),
        is_japanese: conv.is_japanese(text),
        is_romaji: conv.is_romaji(text),
        variants: search_variants(conv, text),
    };

    if json {
        let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{out}");
        return;
    }
    println!("query:    {}", report.query_romaji);
    println!("hiragana: {}", report.variants.hiragana);
    println!("katakana: {}", report.variants.katakana);
    println!("romaji:   {}", report.variants.romaji);
    println!("japanese: {}", report.is_japanese);
    println!("romaji?:  {}", report.is_romaji);
}

pub fn readings_cmd(text: &str) {
    let t = Transliterator::global();
    let dict = KanjiDictionary::global();
    let pad_width = 8;

    for unit in kana_units(text) {
        let display_width = UnicodeWidthStr::width(unit.text);
        let padded = if display_width < pad_width {
            format!("{}{}", unit.text, " ".repeat(pad_width - display_width))
        } else {
            unit.text.to_string()
        };
        let variants = t.unit_variants(&unit);
        println!("{padded}{}", variants.join(" "));

        let details = unit
            .single_char()
            .filter(|_| unit.is_kanji())
            .and_then(|c| dict.details(c));
        if let Some(r) = details {
            let blank = " ".repeat(pad_width);
            if !r.kunyomi.is_empty() {
                println!("{blank}kun: {}", r.kunyomi.join(" "));
            }
            if !r.onyomi.is_empty() {
                println!("{blank}on:  {}", r.onyomi.join(" "));
            }
        }
    }
}
