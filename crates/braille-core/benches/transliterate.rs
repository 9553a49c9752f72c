use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use braille_core::convert::transliterate;
use braille_core::script::Script;

static ENGLISH_INPUTS: &[(&str, &str)] = &[
    ("short", "hello"),
    ("medium", "the quick brown fox jumps over the lazy dog."),
    (
        "long",
        "the quick brown fox jumps over the lazy dog. pack my box with \
         five dozen liquor jugs. how vexingly quick daft zebras jump!",
    ),
];

static HINDI_INPUTS: &[(&str, &str)] = &[
    ("short", "नमस्ते"),
    ("medium", "नमस्ते दुनिया, आप कैसे हैं?"),
    (
        "long",
        "भारत एक विशाल देश है। यहाँ अनेक भाषाएँ बोली जाती हैं और \
         क्षेत्रीय साहित्य की समृद्ध परंपरा है।",
    ),
];

fn bench_english(c: &mut Criterion) {
    let mut group = c.benchmark_group("transliterate/english");
    for &(label, text) in ENGLISH_INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| transliterate(text, Script::English));
        });
    }
    group.finish();
}

fn bench_hindi(c: &mut Criterion) {
    let mut group = c.benchmark_group("transliterate/hindi");
    for &(label, text) in HINDI_INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| transliterate(text, Script::Hindi));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_english, bench_hindi);
criterion_main!(benches);
