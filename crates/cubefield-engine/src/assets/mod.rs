//! Asset decoding for GPU upload.

mod image;

pub use self::image::DecodedImage;
