use image::RgbImage;

/// Renders the least significant bit plane: every channel becomes `0` or `255`.
///
/// Embedded payload shows up as noise in the top rows, untouched areas keep the cover's own LSB texture.
pub fn lsb_plane(image: &RgbImage) -> RgbImage {
    let mut plane = image.clone();
    for c in plane.iter_mut() {
        *c = (*c & 1) * u8::MAX;
    }

    plane
}
