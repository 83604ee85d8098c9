use log::error;
use std::io::{self, Read};
use word_dispersion::{analyze_text_with_config, sort_frequencies, AnalyzerConfig};

const USAGE: &str = "Usage: word-dispersion-cli [--ignore-case] [--regex] <words...>\n\
                     Reads the text to analyze from stdin.";

fn main() {
    // Initialize the logger
    env_logger::init();

    let mut config = AnalyzerConfig::default();
    let mut words: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--ignore-case" | "-i" => config.ignore_case = true,
            "--regex" | "-r" => config.use_regex = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return;
            }
            _ => words.push(arg),
        }
    }
    let words = words.join(" ");

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    match analyze_text_with_config(&input, &words, &config) {
        Ok(analysis) => {
            // Collect each word's hit offsets by row so they can be printed
            // next to the counts.
            let mut offsets_by_row: Vec<Vec<usize>> = vec![Vec::new(); analysis.frequencies.len()];
            for (position, row) in &analysis.hits {
                offsets_by_row[*row].push(*position);
            }

            for (word, frequency) in sort_frequencies(&analysis.frequencies) {
                let row = analysis
                    .frequencies
                    .iter()
                    .position(|(w, _)| *w == word)
                    .unwrap_or_default();
                let offsets: Vec<String> = offsets_by_row[row]
                    .iter()
                    .map(|position| position.to_string())
                    .collect();
                println!("{}: {} [{}]", word, frequency, offsets.join(", "));
            }
        }
        Err(e) => {
            error!("Error analyzing text ({}): {}", e.id(), e);
            std::process::exit(1);
        }
    }
}
