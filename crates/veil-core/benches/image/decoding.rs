use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use std::io::{Read, Write};
use veil_core::media::image::decoder::ImageRgbColor;
use veil_core::media::image::LsbCodec;
use veil_core::media::Media;
use veil_core::universal_decoder::Decoder;

pub fn image_decoding(c: &mut Criterion) {
    let mut img = RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    LsbCodec::encoder(&mut img)
        .write_all(b"Hello World!###\0")
        .expect("Failed to write 16 bytes");

    c.bench_function("Image Decoding", |b| {
        let mut buf = [0; 16];

        b.iter(|| {
            Decoder::new(ImageRgbColor::new(&img))
                .read_exact(&mut buf)
                .expect("Failed to read 16 bytes");
        })
    });

    c.bench_function("Image full extraction", |b| {
        let media = Media::from_image(img.clone());

        b.iter(|| media.unveil_bytes())
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
