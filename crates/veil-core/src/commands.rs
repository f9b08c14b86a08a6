//! In-memory entry points: carrier file bytes go in, carrier file bytes or an unveiled payload come out.
//!
//! Persistence is left to the caller, see [`crate::api`] for the file based builders.

use std::io::Read;

use image::RgbImage;
use log::{debug, warn};

use crate::media::capacity::Capacity;
use crate::media::image::{fit_secret, lsb_plane};
use crate::media::payload::{Fab, Frame, NestedImageScan, PayloadCodecFactory};
use crate::media::{rgb_image_from_bytes, CodecOptions, Media};
use crate::{Result, Unveiled, VeilError};

/// Hides a text message in an image carrier, encrypted when a password is given.
pub fn encode_text(
    carrier: &[u8],
    message: &[u8],
    password: Option<&str>,
    opts: &CodecOptions,
) -> Result<Vec<u8>> {
    let mut media = Media::image_from_bytes(carrier)?;
    hide_message(&mut media, message, password)?;

    media.to_bytes(opts)
}

/// Recovers a text message from an image carrier. A nested image found instead is returned as such.
pub fn decode_text(carrier: &[u8], password: Option<&str>) -> Result<Unveiled> {
    unveil_message(&Media::image_from_bytes(carrier)?, password)
}

/// Hides a whole image in an image carrier, scaling it down first if it does not fit.
pub fn encode_nested_image(cover: &[u8], secret: &[u8], opts: &CodecOptions) -> Result<Vec<u8>> {
    let mut media = Media::image_from_bytes(cover)?;
    hide_image(&mut media, rgb_image_from_bytes(secret)?, opts)?;

    media.to_bytes(opts)
}

pub fn decode_nested_image(carrier: &[u8]) -> Result<RgbImage> {
    unveil_image(&Media::image_from_bytes(carrier)?)
}

/// Hides a text message in a WAV carrier, encrypted when a password is given.
pub fn encode_audio(carrier: &[u8], message: &[u8], password: Option<&str>) -> Result<Vec<u8>> {
    let mut media = Media::audio_from_bytes(carrier)?;
    hide_message(&mut media, message, password)?;

    media.to_bytes(&CodecOptions::default())
}

pub fn decode_audio(carrier: &[u8], password: Option<&str>) -> Result<Unveiled> {
    unveil_message(&Media::audio_from_bytes(carrier)?, password)
}

pub fn capacity(carrier: &[u8]) -> Result<Capacity> {
    Ok(Capacity::compute(&rgb_image_from_bytes(carrier)?))
}

/// Renders the LSB plane of an image carrier as a new image file.
pub fn analyze(carrier: &[u8], opts: &CodecOptions) -> Result<Vec<u8>> {
    let img = rgb_image_from_bytes(carrier)?;

    Media::from_image(lsb_plane(&img)).to_bytes(opts)
}

/// unveil all raw data, no content format interpretation is happening.
/// Just a raw binary dump of the data gathered by the LSB algorithm.
pub fn unveil_raw(carrier: &[u8]) -> Result<Vec<u8>> {
    Ok(Media::from_bytes(carrier)?.unveil_bytes())
}

/// Frames `message` for the carrier kind and embeds it, nothing is written if it does not fit.
pub fn hide_message(media: &mut Media, message: &[u8], password: Option<&str>) -> Result<()> {
    let termination = media.termination();
    let fab = Fab::for_password(password);

    let needed_bits = fab.frame_len(message.len(), termination) * 8;
    let capacity_bits = media.capacity_bits();
    if needed_bits > capacity_bits {
        warn!("A message of {} bytes does not fit into {capacity_bits} bits", message.len());
        return Err(VeilError::PayloadTooLarge {
            needed_bits,
            capacity_bits,
        });
    }

    let frame = fab.create_frame(message)?;
    media.hide_data(&frame.to_bytes(termination))?;

    Ok(())
}

/// Embeds `secret` as a nested image frame, after fitting it to the cover.
pub fn hide_image(media: &mut Media, secret: RgbImage, opts: &CodecOptions) -> Result<()> {
    let Media::Image(cover) = media else {
        warn!("Nested images can only be hidden in image carriers");
        return Err(VeilError::UnsupportedMedia);
    };
    let secret = fit_secret(secret, cover.width(), cover.height(), opts);
    let frame = Frame::NestedImage(secret);
    let termination = media.termination();

    media.hide_data(&frame.to_bytes(termination))?;

    Ok(())
}

/// Extracts the whole carrier and resolves whatever frame it starts with.
pub fn unveil_message(media: &Media, password: Option<&str>) -> Result<Unveiled> {
    let raw = media.unveil_bytes();
    let Some(frame) = Frame::parse(&raw, media.termination())? else {
        warn!("Hidden message not found or corrupted");
        return Ok(Unveiled::NotFound);
    };
    debug!("Found a {:?} frame", frame.kind());

    Ok(Fab::for_password(password).open_frame(frame))
}

/// Reads a nested image frame byte by byte and stops as soon as its body is complete.
pub fn unveil_image(media: &Media) -> Result<RgbImage> {
    let mut scan = NestedImageScan::new(media.capacity_bits() / 8);
    for byte in media.decoder().bytes() {
        if scan.feed(byte?)? {
            break;
        }
    }
    debug!("Nested image scan consumed {} bytes", scan.consumed());

    scan.finish()
}
