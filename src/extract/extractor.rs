use image::codecs::jpeg::JpegEncoder;
use image::{imageops, ExtendedColorType, ImageEncoder, RgbaImage};

use crate::geometry::{ImageRect, PixelRegion};

use super::{EncodedCrop, ExtractError, ExtractResult, ImageSource};

pub const DEFAULT_JPEG_QUALITY: u8 = 92;

#[derive(Debug, Clone, Copy)]
pub struct ImageExtractor {
    jpeg_quality: u8,
}

impl Default for ImageExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}

impl ImageExtractor {
    pub fn new(jpeg_quality: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// Re-reads the source at natural resolution and encodes `rect` alone.
    pub fn extract(&self, source: &ImageSource, rect: ImageRect) -> ExtractResult<EncodedCrop> {
        let bytes = source.fetch()?;
        let raster = decode_natural(&bytes)?;
        tracing::debug!(
            source = %source.display_name(),
            width = raster.width(),
            height = raster.height(),
            "decoded source at natural resolution"
        );
        self.encode_region(&raster, rect)
    }

    pub fn encode_region(&self, raster: &RgbaImage, rect: ImageRect) -> ExtractResult<EncodedCrop> {
        let region = PixelRegion::from_image_rect(rect, raster.width(), raster.height())
            .ok_or(ExtractError::EmptyRegion {
                x: rect.x,
                y: rect.y,
                width: rect.w,
                height: rect.h,
                image_width: raster.width(),
                image_height: raster.height(),
            })?;

        let cropped =
            imageops::crop_imm(raster, region.x, region.y, region.width, region.height).to_image();
        // JPEG has no alpha channel.
        let rgb = image::DynamicImage::ImageRgba8(cropped).to_rgb8();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, self.jpeg_quality)
            .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
            .map_err(ExtractError::Encode)?;

        tracing::debug!(
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            jpeg_bytes = jpeg.len(),
            "encoded selection crop"
        );
        Ok(EncodedCrop::from_jpeg(&jpeg, region))
    }
}

/// Decodes raw image bytes into an RGBA raster at the image's own resolution.
pub fn decode_natural(bytes: &[u8]) -> ExtractResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes).map_err(ExtractError::Decode)?;
    Ok(decoded.to_rgba8())
}
