use criterion::*;
use trie_search_core::Container;

const PHRASE: &str = "the quick brown fox jumps over the lazy dog while another fox watches";

fn create_container() -> Container {
    let mut container = Container::new();
    let words = [
        "the", "there", "quick", "quicker", "brown", "fox", "foxes", "jump", "jumps", "over",
        "lazy", "dog", "dogs", "while", "an", "another", "other", "watch", "watches",
    ];
    for word in words.iter() {
        container.add(word).unwrap();
    }
    container
}

fn cr_bench_words_within(c: &mut Criterion) {
    let naive = create_container();
    let mut compressed = naive.clone();
    compressed.compress();

    c.bench_function("words_within naive", |b| {
        b.iter(|| naive.words_within(black_box(PHRASE)))
    });
    c.bench_function("words_within compressed", |b| {
        b.iter(|| compressed.words_within(black_box(PHRASE)))
    });
    c.bench_function("longest_words_within compressed", |b| {
        b.iter(|| compressed.longest_words_within(black_box(PHRASE)))
    });
}

criterion_group!(benches, cr_bench_words_within);
criterion_main!(benches);
