use std::path::Path;

use anyhow::{Context, Result};

/// Tightly packed RGBA8 pixels, first row first.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Decodes an image file (PNG or JPEG) into RGBA8.
    ///
    /// With `flip_vertical`, the bottom row of the picture becomes the first
    /// row of `rgba`, so texture coordinate `v = 0` samples the bottom edge.
    pub fn from_file<P: AsRef<Path>>(path: P, flip_vertical: bool) -> Result<Self> {
        let path = path.as_ref();
        let img = ::image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?;

        let img = if flip_vertical { img.flipv() } else { img };
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::info!("loaded image {}x{} from {}", width, height, path.display());

        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// Decodes an in-memory encoded image into RGBA8.
    pub fn from_bytes(bytes: &[u8], flip_vertical: bool) -> Result<Self> {
        let img = ::image::load_from_memory(bytes).context("failed to decode image bytes")?;
        let img = if flip_vertical { img.flipv() } else { img };
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// Uniformly colored image.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            rgba: color.repeat((width * height) as usize),
        }
    }

    /// Bytes per row, as required by texture uploads.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encodes a 1×2 PNG: red on top, blue below.
    fn red_over_blue_png() -> Vec<u8> {
        let img = ::image::RgbaImage::from_raw(1, 2, vec![255, 0, 0, 255, 0, 0, 255, 255])
            .unwrap_or_default();
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, ::image::ImageFormat::Png)
            .unwrap_or_else(|e| panic!("png encode: {e}"));
        out.into_inner()
    }

    #[test]
    fn decodes_without_flip() {
        let img = DecodedImage::from_bytes(&red_over_blue_png(), false).unwrap_or_else(|e| panic!("{e:#}"));
        assert_eq!((img.width, img.height), (1, 2));
        assert_eq!(&img.rgba[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn flip_puts_bottom_row_first() {
        let img = DecodedImage::from_bytes(&red_over_blue_png(), true).unwrap_or_else(|e| panic!("{e:#}"));
        assert_eq!(&img.rgba[0..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn missing_file_is_an_error_with_path() {
        let err = DecodedImage::from_file("/nonexistent/container.png", true).err();
        let msg = err.map(|e| format!("{e:#}")).unwrap_or_default();
        assert!(msg.contains("/nonexistent/container.png"));
    }

    #[test]
    fn solid_fills_every_pixel() {
        let img = DecodedImage::solid(2, 2, [0, 0, 0, 255]);
        assert_eq!(img.rgba.len(), 16);
        assert!(img.rgba.chunks(4).all(|p| p == [0, 0, 0, 255]));
        assert_eq!(img.bytes_per_row(), 8);
    }
}
