use crate::Result as StoreErrorResult;

use base64::Engine;

/// Image bytes prepared for upload, plus an inline preview the UI can show
/// before the upload completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    pub data: Vec<u8>,
    pub content_type: String,
    pub preview_url: String,
}

pub trait ImageCompressor: Send + Sync {
    fn compress(&self, bytes: &[u8], content_type: &str) -> StoreErrorResult<CompressedImage>;
}

/// Keeps the bytes as-is and only renders the data-URL preview.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCompressor;

impl ImageCompressor for PassthroughCompressor {
    fn compress(&self, bytes: &[u8], content_type: &str) -> StoreErrorResult<CompressedImage> {
        Ok(CompressedImage {
            data: bytes.to_vec(),
            content_type: content_type.to_string(),
            preview_url: data_url(bytes, content_type),
        })
    }
}

pub(crate) fn data_url(bytes: &[u8], content_type: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{content_type};base64,{encoded}")
}
