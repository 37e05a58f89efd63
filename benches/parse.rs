use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spatial_args::shape::SimpleShapeReader;
use spatial_args::{parse, parse_map};

fn bench_parse(c: &mut Criterion) {
	let queries = [
		("bare", "Intersects(POINT(30 10))"),
		("modifiers", "Distance(CIRCLE(1 2 d=3)) cache=false score=false min=0.5 max=100"),
		("rejected", "Intersects(POINT(30 10)) min=5 max=10 bogus=1"),
	];
	let mut group = c.benchmark_group("parse");
	for (name, query) in queries {
		group.bench_function(name, |b| {
			b.iter(|| parse(black_box(query), &SimpleShapeReader).is_ok())
		});
	}
	group.finish();

	c.bench_function("parse_map", |b| {
		b.iter(|| parse_map(black_box("cache=false\tscore=true\nmin=1 max=2 cache")).len())
	});
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
