use std::fs;
use std::path::Path;

use roma_core::dict::{KanjiDictionary, ReadingResolver};

pub fn compile(input_file: &str, output_file: &str) {
    let (dict, stats) = die!(
        KanjiDictionary::from_kanjidic_file(Path::new(input_file)),
        "Error parsing KANJIDIC: {}"
    );
    eprintln!(
        "Parsed {} kanji ({} readings, {} lines skipped)",
        stats.kanji, stats.readings, stats.skipped
    );
    die!(
        dict.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );
    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!("Wrote {output_file} ({:.1} KB)", file_size as f64 / 1024.0);
}

pub fn info(file: &str) {
    let data = die!(fs::read(file), "Error reading {file}: {}");
    let format = if KanjiDictionary::is_compiled(&data) {
        "compiled (RSKD)"
    } else {
        "KANJIDIC text"
    };
    let dict = die!(
        KanjiDictionary::load(Path::new(file)),
        "Error opening dictionary: {}"
    );
    let (kanji_count, reading_count) = dict.stats();

    println!("Dictionary: {file}");
    println!("Format:     {format}");
    println!("File size:  {:.1} KB", data.len() as f64 / 1024.0);
    println!("Kanji:      {kanji_count}");
    println!("Readings:   {reading_count}");

    let samples = ['日', '山', '学', '東'];
    println!();
    println!("Sample lookups:");
    for kanji in samples {
        match dict.details(kanji) {
            Some(r) => println!(
                "  {kanji}  kun: {}  on: {}",
                r.kunyomi.join(" "),
                r.onyomi.join(" ")
            ),
            None => println!("  {kanji}  (not found)"),
        }
    }
}
