use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_encode::{ECLevel, EncodeOptions, MaskPattern, create_qr_code, encode_batch};

fn bench_encode_short(c: &mut Criterion) {
    let options = EncodeOptions::new().with_error_correction(ECLevel::M);
    c.bench_function("encode_hello_world_m", |b| {
        b.iter(|| create_qr_code(black_box("HELLO WORLD"), black_box(&options)))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    let options = EncodeOptions::new().with_error_correction(ECLevel::Q);
    let url = "https://example.com/products/12345?ref=QR-CODE&utm_source=print";
    c.bench_function("encode_url_q", |b| {
        b.iter(|| create_qr_code(black_box(url), black_box(&options)))
    });
}

fn bench_encode_version_40(c: &mut Criterion) {
    let options = EncodeOptions::new().with_error_correction(ECLevel::L);
    let text = "0123456789".repeat(700);
    c.bench_function("encode_7000_digits_v40", |b| {
        b.iter(|| create_qr_code(black_box(&text), black_box(&options)))
    });
}

// Forced mask skips the eight-way penalty evaluation
fn bench_encode_forced_mask(c: &mut Criterion) {
    let options = EncodeOptions::new()
        .with_error_correction(ECLevel::L)
        .with_mask_pattern(MaskPattern::Pattern0);
    let text = "Lorem ipsum dolor sit amet, 0123456789 ".repeat(20);
    c.bench_function("encode_forced_mask", |b| {
        b.iter(|| create_qr_code(black_box(&text), black_box(&options)))
    });
}

fn bench_encode_batch(c: &mut Criterion) {
    let options = EncodeOptions::new();
    let values: Vec<String> = (0..256).map(|i| format!("ITEM-{:06}/batch", i)).collect();
    c.bench_function("encode_batch_256", |b| {
        b.iter(|| encode_batch(black_box(&values), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_encode_short,
    bench_encode_url,
    bench_encode_version_40,
    bench_encode_forced_mask,
    bench_encode_batch
);
criterion_main!(benches);
