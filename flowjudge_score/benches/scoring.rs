// Scoring throughput benchmarks.
//
// Run with: cargo bench -p flowjudge_score

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use flowjudge_lang::{ThemeKey, extract_vowels};
use flowjudge_score::distance::levenshtein_str;
use flowjudge_score::{Judge, score};

const VERSE: &str = "赤身、トロ、寿司を食べる、海の幸を味わう\n\
    カマボコ食べてサカモト登場\n\
    一本釣りでキングオブヘッド\n\
    大間の初競り、黒いダイヤ！";

fn bench_score(c: &mut Criterion) {
    c.bench_function("score", |b| {
        b.iter(|| score(black_box(VERSE), ThemeKey::Maguro))
    });
}

fn bench_extract_vowels(c: &mut Criterion) {
    c.bench_function("extract_vowels", |b| {
        b.iter(|| extract_vowels(black_box("キングオブヘッドでシャッフルしょーぶ")))
    });
}

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_str", |b| {
        b.iter(|| levenshtein_str(black_box("AIUEOAIUEOAIU"), black_box("OEUIAOEUIAOEU")))
    });
}

fn bench_batch(c: &mut Criterion) {
    let judge = Judge::default();
    let entries: Vec<(String, ThemeKey)> = (0..64)
        .map(|i| (VERSE.to_string(), ThemeKey::ALL[i % ThemeKey::ALL.len()]))
        .collect();
    c.bench_function("score_batch_64", |b| {
        b.iter(|| judge.score_batch(black_box(&entries)))
    });
}

criterion_group!(benches, bench_score, bench_extract_vowels, bench_levenshtein, bench_batch);
criterion_main!(benches);
