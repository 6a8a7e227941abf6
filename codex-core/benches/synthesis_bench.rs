//! Criterion benchmarks for exhaustive and bounded word synthesis.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

use codex_core::{Options, Traits};

const SMALL: [&str; 3] = ["cat", "can", "bat"];
const LARGE: [&str; 6] = ["marta", "lorin", "shenna", "thalia", "orim", "kestrel"];

fn bench_build(c: &mut Criterion) {
	let options = Options::default();
	c.bench_function("traits_new_large", |b| {
		b.iter(|| Traits::new(black_box(&LARGE), &options).unwrap())
	});
}

fn bench_words(c: &mut Criterion) {
	let options = Options::default();
	let traits = Traits::new(&SMALL, &options).unwrap();
	c.bench_function("words_small", |b| b.iter(|| black_box(traits.words(&options))));
}

fn bench_words_n(c: &mut Criterion) {
	let options = Options::default();
	let traits = Traits::new(&LARGE, &options).unwrap();
	let mut rng = StdRng::seed_from_u64(0);

	let mut group = c.benchmark_group("words_n_large");
	for count in [10, 100, 1000] {
		group.bench_function(format!("count_{count}"), |b| {
			b.iter(|| black_box(traits.words_n(count, &options, &mut rng)))
		});
	}
	group.finish();
}

criterion_group!(benches, bench_build, bench_words, bench_words_n);
criterion_main!(benches);
