//! Co-occurrence counting benchmarks.
//!
//! Pair counting runs synchronously inside a key handler, so one count over
//! a realistic corpus has to stay well under a frame.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use corpus_browser::analysis::PairCounter;
use corpus_browser::model::{Corpus, CorpusLine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const VOCABULARY: &[&str] = &[
    "the", "cat", "sat", "on", "mat", "a", "dog", "ran", "over", "fence", "lol", "yes", "no",
    "maybe", "today", "tomorrow", "server", "game", "play", "win",
];

/// Deterministic pseudo-random corpus of `lines` padded messages.
fn generate_corpus(lines: usize) -> Corpus {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let lines = (0..lines)
        .map(|_| {
            let len = 1 + (next() % 12) as usize;
            let words: Vec<&str> = (0..len)
                .map(|_| VOCABULARY[(next() % VOCABULARY.len() as u64) as usize])
                .collect();
            CorpusLine::new(format!(" {} ", words.join(" ")))
        })
        .collect();
    Corpus::new(lines)
}

fn bench_tokenize(c: &mut Criterion) {
    let corpus = generate_corpus(50_000);
    c.bench_function("pair_counter_new_50k_lines", |b| {
        b.iter(|| PairCounter::new(black_box(&corpus), 2))
    });
}

fn bench_count(c: &mut Criterion) {
    let corpus = generate_corpus(50_000);
    let counter = PairCounter::new(&corpus, 2);
    let wide = PairCounter::new(&corpus, 4);

    let mut group = c.benchmark_group("pair_count_50k_lines");
    group.bench_function("common_word_window_2", |b| {
        b.iter(|| counter.count(black_box("the")))
    });
    group.bench_function("rare_word_window_2", |b| {
        b.iter(|| counter.count(black_box("tomorrow")))
    });
    group.bench_function("common_word_window_4", |b| {
        b.iter(|| wide.count(black_box("the")))
    });
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_count);
criterion_main!(benches);
