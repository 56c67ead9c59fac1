use bitpacker::{Arity, BitPacker};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::Rng;

const NBITS: usize = 1 << 20;

fn random_bits(n: usize) -> Vec<bool> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_append_bit(c: &mut Criterion) {
    let bits = random_bits(NBITS);

    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Elements(NBITS as u64));
    group.bench_function("append_bit", |b| {
        b.iter(|| {
            let mut packer = BitPacker::new();
            for &bit in &bits {
                packer.append_bit(black_box(bit));
            }
            packer
        })
    });
    group.bench_function("append_bit_preallocated", |b| {
        b.iter(|| {
            let mut packer = BitPacker::with_capacity(NBITS);
            packer.extend(bits.iter().copied());
            packer
        })
    });
    group.finish();
}

fn bench_append_bytes(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..NBITS / 8).map(|_| rng.gen()).collect();

    let mut group = c.benchmark_group("append_bytes");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("aligned", |b| {
        b.iter(|| {
            let mut packer = BitPacker::new();
            packer.append_bytes(black_box(&bytes));
            packer
        })
    });
    group.bench_function("unaligned", |b| {
        b.iter(|| {
            let mut packer = BitPacker::new();
            packer.append_bit(true);
            packer.append_bytes(black_box(&bytes));
            packer
        })
    });
    group.finish();
}

fn bench_get_nary(c: &mut Criterion) {
    let arity = Arity::new(16).unwrap();
    let mut rng = rand::thread_rng();
    let mut packer = BitPacker::new().with_arity(arity);
    for _ in 0..NBITS / 4 {
        packer.append_nary(rng.gen_range(0..16)).unwrap();
    }

    c.bench_function("get_nary", |b| {
        b.iter_batched(
            || rng.gen_range(0..packer.nary_len()),
            |i| packer.get_nary(black_box(i)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_append_bit, bench_append_bytes, bench_get_nary);
criterion_main!(benches);
