pub mod constants;

use std::{fs, path::Path};

use word_dispersion::AnalyzerConfig;

/// A parsed analysis fixture file.
///
/// Fixture files are plain text documents with annotation header lines:
/// - `WORDS: <space-separated target words>`
/// - `OPTIONS: [ignore-case] [regex]` (optional)
/// - `EXPECTED: <word> <count>` (one per target word)
///
/// Annotation lines are stripped before analysis so they never tokenize into
/// the document itself.
pub struct Fixture {
    pub text: String,
    pub words: String,
    pub config: AnalyzerConfig,
    pub expected_frequencies: Vec<(String, usize)>,
}

/// Utility to load an analysis fixture for testing and benchmarking.
pub fn read_fixture(file_path: &Path) -> Fixture {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let mut words = String::new();
    let mut config = AnalyzerConfig::default();
    let mut expected_frequencies = Vec::new();
    let mut text_lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("WORDS:") {
            words = rest.trim().to_string();
        } else if let Some(rest) = trimmed.strip_prefix("OPTIONS:") {
            for option in rest.split_whitespace() {
                match option {
                    "ignore-case" => config.ignore_case = true,
                    "regex" => config.use_regex = true,
                    other => panic!("Unknown fixture option: {}", other),
                }
            }
        } else if let Some(rest) = trimmed.strip_prefix("EXPECTED:") {
            let mut parts = rest.split_whitespace();
            let word = parts
                .next()
                .expect("EXPECTED line must name a word")
                .to_string();
            let count = parts
                .next()
                .expect("EXPECTED line must carry a count")
                .parse()
                .expect("EXPECTED count must be an integer");
            expected_frequencies.push((word, count));
        } else {
            text_lines.push(line);
        }
    }

    Fixture {
        text: text_lines.join("\n"),
        words,
        config,
        expected_frequencies,
    }
}
