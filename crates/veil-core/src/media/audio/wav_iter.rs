use std::io::{Read, Write};
use std::ops::Range;
use std::slice::{Iter, IterMut};

use byteorder::{ByteOrder, LittleEndian};
use hound::{SampleFormat, WavReader, WavSpec};
use log::{debug, error};

use crate::error::VeilError;
use crate::media::{MediaPrimitive, MediaPrimitiveMut};
use crate::result::Result;

/// `RIFF`, the file length and `WAVE`
const RIFF_HEADER_LEN: usize = 12;
/// chunk id and chunk length
const CHUNK_HEADER_LEN: usize = 8;
const DATA_CHUNK_ID: &[u8] = b"data";

/// PCM wave audio held as the raw bytes of its `data` chunk, in file order.
///
/// Everything around the sample data (RIFF header, `fmt ` and any other chunk) is kept
/// byte for byte and written back unchanged, so only sample byte LSBs ever differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAudio {
    header: Vec<u8>,
    frame_bytes: Vec<u8>,
    trailer: Vec<u8>,
}

impl WavAudio {
    /// reads an integer PCM wave stream with 8, 16, 24 or 32 bits per sample
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let spec = WavReader::new(bytes)
            .map_err(|e| {
                error!("Error reading wav header: {e}");
                VeilError::InvalidAudioMedia
            })?
            .spec();
        ensure_integer_pcm(&spec)?;

        let data = locate_data_chunk(bytes)?;
        debug!(
            "wav data chunk at {}..{}, {} channels with {} bits",
            data.start, data.end, spec.channels, spec.bits_per_sample
        );

        Ok(Self {
            header: bytes[..data.start].to_vec(),
            frame_bytes: bytes[data.clone()].to_vec(),
            trailer: bytes[data.end..].to_vec(),
        })
    }

    pub fn frame_bytes(&self) -> &[u8] {
        &self.frame_bytes
    }

    /// writes the original header and trailing chunks around the current frame bytes
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        [&self.header, &self.frame_bytes, &self.trailer]
            .into_iter()
            .try_for_each(|part| writer.write_all(part))
            .and_then(|()| writer.flush())
            .map_err(|e| {
                error!("Error writing wav file: {e}");
                VeilError::AudioEncodingError
            })
    }

    /// frame bytes as immutable primitives, in file order
    pub fn frame_iter(&self) -> AudioFrameIter<'_> {
        AudioFrameIter {
            bytes: self.frame_bytes.iter(),
        }
    }

    /// frame bytes as mutable primitives, in file order
    pub fn frame_iter_mut(&mut self) -> AudioFrameIterMut<'_> {
        AudioFrameIterMut {
            bytes: self.frame_bytes.iter_mut(),
        }
    }
}

/// only integer PCM is supported
fn ensure_integer_pcm(spec: &WavSpec) -> Result<()> {
    match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 8 | 16 | 24 | 32) => Ok(()),
        (format, bits) => {
            error!("Unsupported wav sample format {format:?} with {bits} bits");
            Err(VeilError::InvalidAudioMedia)
        }
    }
}

/// Walks the RIFF chunks up to `data`, a length running past the end of the file is cut there.
fn locate_data_chunk(bytes: &[u8]) -> Result<Range<usize>> {
    let mut pos = RIFF_HEADER_LEN;
    while let Some(chunk) = pos
        .checked_add(CHUNK_HEADER_LEN)
        .and_then(|end| bytes.get(pos..end))
    {
        let len = LittleEndian::read_u32(&chunk[4..]) as usize;
        let body = pos + CHUNK_HEADER_LEN;
        if &chunk[..4] == DATA_CHUNK_ID {
            return Ok(body..body.saturating_add(len).min(bytes.len()));
        }
        // chunks are padded to an even length
        pos = body.saturating_add(len).saturating_add(len & 1);
    }

    error!("wav file without a data chunk");
    Err(VeilError::InvalidAudioMedia)
}

/// Iterating raw wav frame bytes that yields `MediaPrimitive`
pub struct AudioFrameIter<'a> {
    bytes: Iter<'a, u8>,
}

impl Iterator for AudioFrameIter<'_> {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        self.bytes.next().map(|b| MediaPrimitive::AudioFrameByte(*b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

/// Iterating mutable raw wav frame bytes that yields `MediaPrimitiveMut`
pub struct AudioFrameIterMut<'a> {
    bytes: IterMut<'a, u8>,
}

impl<'a> Iterator for AudioFrameIterMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.bytes.next().map(MediaPrimitiveMut::AudioFrameByte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use hound::WavWriter;

    use super::*;
    use crate::media::HideBit;
    use crate::test_utils::{pcm_wav, prepare_wav};

    fn samples_of(wav: &[u8]) -> (WavSpec, Vec<i32>) {
        let mut reader = WavReader::new(wav).expect("Cannot create reader");
        let samples = reader.samples::<i32>().map(|s| s.unwrap()).collect();
        (reader.spec(), samples)
    }

    #[test]
    fn it_should_expose_16_bit_samples_as_little_endian_bytes() {
        let wav = prepare_wav(16, &[0x0102, -2]);
        let audio = WavAudio::from_reader(Cursor::new(wav)).expect("Cannot load wav");

        assert_eq!(audio.frame_bytes(), [0x02, 0x01, 0xfe, 0xff]);
        assert_eq!(audio.frame_iter().count(), 4);
    }

    #[test]
    fn it_should_expose_8_bit_samples_as_unsigned_bytes() {
        let wav = prepare_wav(8, &[-128, 0, 127]);
        let audio = WavAudio::from_reader(Cursor::new(wav)).expect("Cannot load wav");

        assert_eq!(audio.frame_bytes(), [0, 128, 255]);
    }

    #[test]
    fn it_should_write_back_the_same_stream_parameters_and_samples() {
        for bits in [8, 16, 24, 32] {
            let wav = prepare_wav(bits, &[-100, -1, 0, 1, 100, 7, 8, 9]);
            let audio = WavAudio::from_reader(Cursor::new(&wav)).expect("Cannot load wav");

            let mut out = Cursor::new(Vec::new());
            audio.write_to(&mut out).expect("Cannot write wav");

            assert_eq!(samples_of(&out.into_inner()), samples_of(&wav), "{bits} bits");
        }
    }

    #[test]
    fn it_should_only_change_the_lsb_of_the_sample_low_byte() {
        let wav = prepare_wav(16, &[0x1000, 0x1000]);
        let mut audio = WavAudio::from_reader(Cursor::new(&wav)).expect("Cannot load wav");
        audio
            .frame_iter_mut()
            .next()
            .expect("there are 4 frame bytes")
            .hide_bit(true);

        let mut out = Cursor::new(Vec::new());
        audio.write_to(&mut out).expect("Cannot write wav");

        let (spec, samples) = samples_of(&out.into_inner());
        assert_eq!(samples, [0x1001, 0x1000]);
        assert_eq!(spec, samples_of(&wav).0);
    }

    #[test]
    fn it_should_refuse_float_samples() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut out = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut out, spec).expect("Cannot create writer");
            writer.write_sample(0.5f32).expect("Cannot write sample");
            writer.finalize().expect("Cannot finalize");
        }

        let result = WavAudio::from_reader(Cursor::new(out.into_inner()));
        assert!(matches!(result, Err(VeilError::InvalidAudioMedia)));
    }

    #[test]
    fn it_should_refuse_garbage() {
        let result = WavAudio::from_reader(&b"definitely not a wave file"[..]);

        assert!(matches!(result, Err(VeilError::InvalidAudioMedia)));
    }

    #[test]
    fn it_should_keep_the_plain_pcm_header_of_wide_and_multichannel_files() {
        for (channels, bits) in [(1, 24), (4, 16)] {
            let data: Vec<u8> = (0..96).map(|i| (i * 37) as u8).collect();
            let wav = pcm_wav(channels, bits, &data, &[]);
            let mut audio = WavAudio::from_bytes(&wav).expect("Cannot load wav");
            assert_eq!(audio.frame_bytes(), data);
            for primitive in audio.frame_iter_mut() {
                primitive.hide_bit(true);
            }

            let mut out = Vec::new();
            audio.write_to(&mut out).expect("Cannot write wav");

            assert_eq!(out.len(), wav.len(), "{channels}x{bits}");
            assert_eq!(out[..44], wav[..44], "{channels}x{bits}");
            // format tag 1, plain PCM
            assert_eq!(LittleEndian::read_u16(&out[20..22]), 1);
            for (a, b) in out[44..].iter().zip(&wav[44..]) {
                assert_eq!(a & !1, b & !1);
            }
        }
    }

    #[test]
    fn it_should_keep_chunks_around_the_sample_data() {
        let mut wav = pcm_wav(2, 16, &[1, 2, 3, 4], b"LIST\x04\0\0\0info");
        let data_start = wav.len() - 4;
        let trailer = b"junk\x02\0\0\0ab";
        wav.extend_from_slice(trailer);
        let riff_len = (wav.len() - 8) as u32;
        LittleEndian::write_u32(&mut wav[4..8], riff_len);

        let audio = WavAudio::from_bytes(&wav).expect("Cannot load wav");
        assert_eq!(audio.frame_bytes(), [1, 2, 3, 4]);

        let mut out = Vec::new();
        audio.write_to(&mut out).expect("Cannot write wav");
        assert_eq!(out, wav);
        assert_eq!(&out[data_start - 8..data_start - 4], b"data");
    }

    #[test]
    fn it_should_refuse_a_wav_without_data_chunk() {
        assert!(matches!(
            locate_data_chunk(b"RIFF\x04\0\0\0WAVEfmt \x00\0\0\0"),
            Err(VeilError::InvalidAudioMedia)
        ));
    }
}
