use image::imageops::FilterType;
use image::ImageFormat;

/// Default linear safety margin applied when a nested image has to shrink
pub const DEFAULT_NESTED_IMAGE_MARGIN: f64 = 0.9;

/// Codec configuration shared by all entry points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecOptions {
    /// Raster format image carriers are written as, only lossless formats survive a save.
    pub image_format: ImageFormat,

    /// Linear margin applied on top of the exact fitting ratio when a secret image
    /// is larger than the cover can hold. `0.9` leaves 10% headroom per side.
    pub nested_image_margin: f64,

    /// Resampling filter used when a secret image is scaled down
    pub resize_filter: FilterType,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            image_format: ImageFormat::Png,
            nested_image_margin: DEFAULT_NESTED_IMAGE_MARGIN,
            resize_filter: FilterType::CatmullRom,
        }
    }
}

impl CodecOptions {
    pub fn with_image_format(mut self, image_format: ImageFormat) -> Self {
        self.image_format = image_format;
        self
    }

    pub fn with_nested_image_margin(mut self, margin: f64) -> Self {
        self.nested_image_margin = margin;
        self
    }

    pub fn with_resize_filter(mut self, filter: FilterType) -> Self {
        self.resize_filter = filter;
        self
    }
}
