use criterion::{criterion_group, criterion_main, Criterion};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::{Cursor, Read, Write};
use veil_core::media::audio::{LsbCodec, WavAudio};

fn prepare_audio() -> WavAudio {
    let spec = WavSpec {
        channels: 2,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut out = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut out, spec).expect("Cannot create writer");
        for i in 0..88_200 {
            let sample = ((i as f64 / 20.0).sin() * 10_000.0) as i16;
            writer.write_sample(sample).expect("Cannot write sample");
        }
        writer.finalize().expect("Cannot finalize");
    }
    out.set_position(0);

    WavAudio::from_reader(out).expect("Cannot load audio")
}

pub fn audio_decoding(c: &mut Criterion) {
    let mut audio = prepare_audio();
    LsbCodec::encoder(&mut audio)
        .write_all(b"Hello World###")
        .expect("Cannot write to codec");

    c.bench_function("Audio Decoding", |b| {
        let mut buf = [0; 14];

        b.iter(|| {
            LsbCodec::decoder(&audio)
                .read_exact(&mut buf)
                .expect("Cannot read 14 bytes from decoder");
        })
    });
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
