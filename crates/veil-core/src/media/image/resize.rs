use image::imageops::resize;
use image::RgbImage;
use log::debug;

use crate::media::CodecOptions;

/// Cover pixels needed per secret pixel: 24 payload bits at 3 bits per cover pixel.
pub const COVER_PIXELS_PER_SECRET_PIXEL: u64 = 8;

/// Number of secret pixels a `cover_width` x `cover_height` cover can host.
pub fn pixel_budget(cover_width: u32, cover_height: u32) -> u64 {
    u64::from(cover_width) * u64::from(cover_height) / COVER_PIXELS_PER_SECRET_PIXEL
}

/// Scales `secret` down, aspect ratio preserved, when it has more pixels than the cover's budget.
///
/// The linear scale is `sqrt(budget / secret_pixels) * opts.nested_image_margin`,
/// each side truncated and clamped to at least one pixel. A secret within budget is returned as is.
pub fn fit_secret(
    secret: RgbImage,
    cover_width: u32,
    cover_height: u32,
    opts: &CodecOptions,
) -> RgbImage {
    let budget = pixel_budget(cover_width, cover_height);
    let (width, height) = secret.dimensions();
    let secret_pixels = u64::from(width) * u64::from(height);

    if secret_pixels <= budget {
        return secret;
    }

    let ratio = (budget as f64 / secret_pixels as f64).sqrt();
    let new_width = ((width as f64 * ratio * opts.nested_image_margin) as u32).max(1);
    let new_height = ((height as f64 * ratio * opts.nested_image_margin) as u32).max(1);
    debug!(
        "secret image {width}x{height} exceeds the budget of {budget} pixels, resizing to {new_width}x{new_height}"
    );

    resize(&secret, new_width, new_height, opts.resize_filter)
}
