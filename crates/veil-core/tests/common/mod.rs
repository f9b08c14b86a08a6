#![allow(dead_code)]

use std::io::Cursor;

use byteorder::{LittleEndian, WriteBytesExt};
use hound::{SampleFormat, WavSpec, WavWriter};
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};

pub const PASSWORD: &str = "SuperSecret42";

pub fn prepare_gradient_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 5) as u8, (y * 7) as u8, ((x + y) * 3 + 3) as u8])
    })
}

/// every least significant bit is 0
pub fn prepare_plain_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb([128, 128, 128]))
}

pub fn png_of(image: &RgbImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .expect("Cannot encode png");
    out.into_inner()
}

pub fn wav_spec(bits_per_sample: u16, channels: u16) -> WavSpec {
    WavSpec {
        channels,
        sample_rate: 22_050,
        bits_per_sample,
        sample_format: SampleFormat::Int,
    }
}

pub fn wav_of(spec: WavSpec, samples: &[i32]) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut out, spec).expect("Cannot create writer");
        for sample in samples {
            writer.write_sample(*sample).expect("Cannot write sample");
        }
        writer.finalize().expect("Cannot finalize");
    }
    out.into_inner()
}

/// a 16 bit mono sine, `count` samples
pub fn prepare_sine_wav(count: usize) -> Vec<u8> {
    let samples: Vec<i32> = (0..count)
        .map(|i| ((i as f64 / 10.0).sin() * 12_000.0) as i32)
        .collect();
    wav_of(wav_spec(16, 1), &samples)
}

/// a message of `len` printable bytes without the `###` delimiter
pub fn message_of(len: usize) -> Vec<u8> {
    (0..len).map(|i| b'a' + (i % 26) as u8).collect()
}

/// the longest message whose frame still fits `capacity_bytes`
pub fn max_message_len(frame_len: impl Fn(usize) -> usize, capacity_bytes: usize) -> usize {
    (0..=capacity_bytes)
        .take_while(|len| frame_len(*len) <= capacity_bytes)
        .last()
        .expect("at least the empty message has to fit")
}

/// a plain PCM (format tag 1) wave file written by hand, `chunks` sit between `fmt ` and `data`
pub fn pcm_wav(channels: u16, bits_per_sample: u16, data: &[u8], chunks: &[u8]) -> Vec<u8> {
    let block_align = channels * bits_per_sample / 8;
    let sample_rate = 8000u32;
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.write_u32::<LittleEndian>((4 + 24 + chunks.len() + 8 + data.len()) as u32).unwrap();
    wav.extend_from_slice(b"WAVEfmt ");
    wav.write_u32::<LittleEndian>(16).unwrap();
    wav.write_u16::<LittleEndian>(1).unwrap();
    wav.write_u16::<LittleEndian>(channels).unwrap();
    wav.write_u32::<LittleEndian>(sample_rate).unwrap();
    wav.write_u32::<LittleEndian>(sample_rate * u32::from(block_align)).unwrap();
    wav.write_u16::<LittleEndian>(block_align).unwrap();
    wav.write_u16::<LittleEndian>(bits_per_sample).unwrap();
    wav.extend_from_slice(chunks);
    wav.extend_from_slice(b"data");
    wav.write_u32::<LittleEndian>(data.len() as u32).unwrap();
    wav.extend_from_slice(data);
    wav
}
