mod encoded;
mod extractor;
mod source;

pub use encoded::EncodedCrop;
pub use extractor::{decode_natural, ImageExtractor, DEFAULT_JPEG_QUALITY};
pub use source::ImageSource;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read image file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to download image {url}: {message}")]
    Download { url: String, message: String },
    #[error("failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("selection {x},{y} {width}x{height} does not overlap the {image_width}x{image_height} image")]
    EmptyRegion {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        image_width: u32,
        image_height: u32,
    },
    #[error("failed to encode crop: {0}")]
    Encode(#[source] image::ImageError),
    #[error("crop payload is not a base64 jpeg data URI")]
    MalformedPayload,
}

pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
