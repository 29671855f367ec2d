use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::DynamicImage;

use crate::geometry::PixelRegion;

use super::{ExtractError, ExtractResult};

const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// JPEG crop ready to be posted as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCrop {
    data_uri: String,
    region: PixelRegion,
}

impl EncodedCrop {
    pub(super) fn from_jpeg(jpeg: &[u8], region: PixelRegion) -> Self {
        let mut data_uri = String::with_capacity(JPEG_DATA_URI_PREFIX.len() + jpeg.len() * 4 / 3 + 4);
        data_uri.push_str(JPEG_DATA_URI_PREFIX);
        STANDARD.encode_string(jpeg, &mut data_uri);
        Self { data_uri, region }
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Source pixels the crop was taken from.
    pub fn region(&self) -> PixelRegion {
        self.region
    }

    pub fn width(&self) -> u32 {
        self.region.width
    }

    pub fn height(&self) -> u32 {
        self.region.height
    }

    pub fn decode(&self) -> ExtractResult<DynamicImage> {
        let payload = self
            .data_uri
            .strip_prefix(JPEG_DATA_URI_PREFIX)
            .ok_or(ExtractError::MalformedPayload)?;
        let jpeg = STANDARD
            .decode(payload)
            .map_err(|_| ExtractError::MalformedPayload)?;
        image::load_from_memory(&jpeg).map_err(ExtractError::Decode)
    }
}
