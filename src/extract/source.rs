use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use super::{ExtractError, ExtractResult};

const MAX_DOWNLOAD_BYTES: u64 = 128 * 1024 * 1024;

/// Where the displayed image's original bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Url(String),
    Memory(Arc<[u8]>),
}

impl ImageSource {
    /// `http://` and `https://` arguments are URLs; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        let lower = arg.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Url(url) => url.rsplit('/').next().unwrap_or(url).to_string(),
            Self::Memory(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }

    /// Full, unscaled bytes of the image.
    pub fn fetch(&self) -> ExtractResult<Vec<u8>> {
        match self {
            Self::File(path) => std::fs::read(path).map_err(|err| ExtractError::ReadFile {
                path: path.clone(),
                source: err,
            }),
            Self::Url(url) => download(url),
            Self::Memory(bytes) => Ok(bytes.to_vec()),
        }
    }
}

fn download(url: &str) -> ExtractResult<Vec<u8>> {
    let response = ureq::get(url).call().map_err(|err| ExtractError::Download {
        url: url.to_string(),
        message: err.to_string(),
    })?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_DOWNLOAD_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|err| ExtractError::Download {
            url: url.to_string(),
            message: err.to_string(),
        })?;
    tracing::debug!(url, bytes = bytes.len(), "downloaded source image");
    Ok(bytes)
}
