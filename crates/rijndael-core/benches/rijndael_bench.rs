use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rijndael_core::{Rijndael256, BLOCK_SIZE};

fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_expansion");
    for key_len in [16usize, 24, 32] {
        let key = vec![0x5au8; key_len];
        group.bench_function(format!("rijndael256_k{}", key_len * 8), |b| {
            b.iter(|| Rijndael256::new(black_box(&key)));
        });
    }
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key = [0u8; 32];
    rng.fill_bytes(&mut key);
    let cipher = match Rijndael256::new(&key) {
        Ok(cipher) => cipher,
        Err(err) => panic!("bench key rejected: {err}"),
    };

    let mut block = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));
    group.bench_function("encrypt_block", |b| {
        b.iter(|| {
            let mut data = black_box(block);
            cipher.encrypt_block(&mut data);
            data
        });
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| {
            let mut data = black_box(block);
            cipher.decrypt_block(&mut data);
            data
        });
    });
    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_block);
criterion_main!(benches);
