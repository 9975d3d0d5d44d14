use criterion::{criterion_group, criterion_main, Criterion};
use tf_idf_bag::{extract_ngrams, normalize, Bag, BagConfig};

const WORDS: &[&str] = &[
    "war", "peace", "pride", "prejudice", "alice", "wonderland", "monster", "proposal",
    "tale", "cities", "treasure", "island", "river", "expectations", "strange", "case",
];

// 固定の疑似乱数で文書を作る (xorshift32)
fn synthetic_corpus(docs: usize, sentences: usize, words: usize) -> Vec<String> {
    let mut state = 0x1234_5678u32;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..docs)
        .map(|_| {
            let mut text = String::new();
            for _ in 0..sentences {
                for w in 0..words {
                    if w > 0 {
                        text.push(' ');
                    }
                    text.push_str(WORDS[next() as usize % WORDS.len()]);
                }
                text.push_str(". ");
            }
            text
        })
        .collect()
}

fn build_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(100, 20, 12);
    let config = BagConfig::new().with_max_ngram_length(3);

    c.bench_function("build_bag", |b| {
        b.iter(|| Bag::<f64>::build(&corpus, &config))
    });

    let sentences: Vec<&str> = corpus[0].split_inclusive(". ").collect();
    c.bench_function("extract_ngrams", |b| {
        b.iter(|| extract_ngrams(&sentences, 3))
    });

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(&corpus[0]))
    });
}

criterion_group!(benches, build_benchmark);
criterion_main!(benches);
