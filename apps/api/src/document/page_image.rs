//! PageImage: the transport form of a rendered résumé page.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::document::renderer::RenderError;

/// MIME tag attached to every page payload.
pub const PAGE_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Default quality of the common imaging libraries.
const JPEG_QUALITY: u8 = 75;

/// A single page rendered to JPEG and base64-encoded (standard alphabet, padded).
///
/// Only the renderer can construct one: there is no public constructor, so an
/// evaluation always carries an image that came from an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    mime_type: &'static str,
    data: String,
}

impl PageImage {
    /// Encodes an RGB bitmap as JPEG, then base64.
    pub(crate) fn from_bitmap(bitmap: &RgbImage) -> Result<Self, RenderError> {
        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
            .encode_image(bitmap)
            .map_err(|e| RenderError::Encode(e.to_string()))?;

        Ok(Self {
            mime_type: PAGE_IMAGE_MIME_TYPE,
            data: STANDARD.encode(&jpeg),
        })
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type
    }

    /// Base64 text of the JPEG bytes.
    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Drops the alpha channel of a tightly packed RGBA buffer.
/// PDFium renders onto an opaque white background, so alpha carries no information.
pub(crate) fn rgba_to_rgb(width: u32, height: u32, rgba: &[u8]) -> Result<RgbImage, RenderError> {
    let rgb: Vec<u8> = rgba
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
        RenderError::Encode(format!(
            "bitmap buffer of {} bytes does not match {width}x{height} RGBA",
            rgba.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_payload_is_tagged_as_jpeg() {
        let image = PageImage::from_bitmap(&solid(10, 10, [255, 255, 255])).unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_payload_decodes_to_jpeg_bytes() {
        let image = PageImage::from_bitmap(&solid(16, 8, [10, 20, 30])).unwrap();
        let jpeg = STANDARD.decode(image.data()).unwrap();
        // SOI marker
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory_with_format(&jpeg, image::ImageFormat::Jpeg).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let bitmap = solid(40, 30, [200, 100, 50]);
        let first = PageImage::from_bitmap(&bitmap).unwrap();
        let second = PageImage::from_bitmap(&bitmap).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rgba_to_rgb_drops_alpha() {
        let rgba = [1, 2, 3, 255, 4, 5, 6, 0];
        let rgb = rgba_to_rgb(2, 1, &rgba).unwrap();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([1, 2, 3]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([4, 5, 6]));
    }

    #[test]
    fn test_rgba_to_rgb_rejects_short_buffer() {
        let rgba = [0u8; 4];
        assert!(matches!(
            rgba_to_rgb(2, 2, &rgba),
            Err(RenderError::Encode(_))
        ));
    }
}
