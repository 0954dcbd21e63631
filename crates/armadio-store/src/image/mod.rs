pub mod compressor;
pub mod host;

pub use compressor::{CompressedImage, ImageCompressor, PassthroughCompressor};
pub use host::{DataUrlHost, ImageHost, RestImageHost, upload_with_fallback};
