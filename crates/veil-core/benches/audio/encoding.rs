use criterion::{criterion_group, criterion_main, Criterion};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::{Cursor, Write};
use veil_core::commands::encode_audio;
use veil_core::media::audio::{LsbCodec, WavAudio};

fn prepare_wav() -> Vec<u8> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut out = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut out, spec).expect("Cannot create writer");
        for i in 0..44_100 {
            let sample = ((i as f64 / 20.0).sin() * 10_000.0) as i16;
            writer.write_sample(sample).expect("Cannot write sample");
        }
        writer.finalize().expect("Cannot finalize");
    }
    out.into_inner()
}

pub fn audio_encoding(c: &mut Criterion) {
    let wav = prepare_wav();

    c.bench_function("Audio Encoding to memory", |b| {
        let mut audio = WavAudio::from_reader(Cursor::new(&wav)).expect("Cannot load audio");
        let secret_message = b"Hello World!###";

        b.iter(|| {
            LsbCodec::encoder(&mut audio)
                .write_all(&secret_message[..])
                .expect("Cannot write to codec");
        })
    });

    c.bench_function("Audio Encoding a wav file", |b| {
        b.iter(|| encode_audio(&wav, b"Hello World!", None).expect("Cannot hide message"))
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
