use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_dispersion::{analyze_text_with_config, tokenize, AnalyzerConfig};

const TEXT: &str = "Call me Ishmael. Some years ago--never mind how long precisely--having \
    little or no money in my purse, and nothing particular to interest me on shore, I thought \
    I would sail about a little and see the watery part of the world. It is a way I have of \
    driving off the spleen and regulating the circulation. Whenever I find myself growing grim \
    about the mouth; whenever it is a damp, drizzly November in my soul; whenever I find myself \
    involuntarily pausing before coffin warehouses... then, I account it high time to get to \
    sea as soon as I can.";

fn benchmark_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(TEXT))));
}

fn benchmark_analyze_text(c: &mut Criterion) {
    let config = AnalyzerConfig {
        ignore_case: true,
        use_regex: false,
    };

    c.bench_function("analyze_text_literal", |b| {
        b.iter(|| {
            analyze_text_with_config(black_box(TEXT), black_box("whenever sea soul"), &config)
        })
    });

    let regex_config = AnalyzerConfig {
        ignore_case: true,
        use_regex: true,
    };

    c.bench_function("analyze_text_regex", |b| {
        b.iter(|| {
            analyze_text_with_config(black_box(TEXT), black_box(r"wh\w+ s..l?"), &regex_config)
        })
    });
}

criterion_group!(benches, benchmark_tokenize, benchmark_analyze_text);
criterion_main!(benches);
