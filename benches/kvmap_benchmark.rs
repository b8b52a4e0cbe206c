use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kvmap::{DirectMap, IndexedMap, KvMap, ListMap};
use rand::distributions::Alphanumeric;
use rand::rngs::ThreadRng;
use rand::Rng;

const WRITES: usize = 10_000;

pub fn get_random_string(gen: &mut ThreadRng) -> String {
    let sz = gen.gen_range(1, 32);
    gen.sample_iter(&Alphanumeric).take(sz).collect()
}

fn fill(map: &mut dyn KvMap<u64>, keys: &[String]) {
    for (i, key) in keys.iter().enumerate() {
        map.put(key.clone(), i as u64).expect("failed to put value");
    }
}

fn bench_map(c: &mut Criterion, name: &str, map: &mut dyn KvMap<u64>) {
    let mut gen = rand::thread_rng();
    let keys: Vec<String> = (0..WRITES).map(|_| get_random_string(&mut gen)).collect();
    fill(map, &keys);
    c.bench_function(&format!("{}_get_hit", name), |b| {
        b.iter(|| {
            let key = &keys[gen.gen_range(0, keys.len())];
            black_box(map.get(key).expect("failed to get key"));
        })
    });
    c.bench_function(&format!("{}_get_miss", name), |b| {
        b.iter(|| {
            // generated keys never contain spaces
            black_box(map.get("this key is never written to the map").is_err());
        })
    });
    c.bench_function(&format!("{}_contains", name), |b| {
        b.iter(|| {
            let key = &keys[gen.gen_range(0, keys.len())];
            black_box(map.contains(key).expect("failed to check key"));
        })
    });
}

pub fn criterion_benchmark_direct(c: &mut Criterion) {
    bench_map(c, "direct", &mut DirectMap::<u64>::new());
}

pub fn criterion_benchmark_list(c: &mut Criterion) {
    bench_map(c, "list", &mut ListMap::<u64>::new());
}

pub fn criterion_benchmark_indexed(c: &mut Criterion) {
    bench_map(c, "indexed", &mut IndexedMap::<u64>::new());
}

criterion_group!(
    benches,
    criterion_benchmark_direct,
    criterion_benchmark_list,
    criterion_benchmark_indexed
);
criterion_main!(benches);
