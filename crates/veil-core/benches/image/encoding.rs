use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use std::io::Write;
use veil_core::media::image::LsbCodec;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding to memory", |b| {
        let mut img = RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let secret_message = b"Hello World!###\0";

        b.iter(|| {
            LsbCodec::encoder(&mut img)
                .write_all(&secret_message[..])
                .expect("Cannot write to codec");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
