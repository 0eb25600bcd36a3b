use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::errors::RenderError;

/// JPEG has no alpha channel; alpha is discarded and each pixel keeps its RGB.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>, RenderError> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode_image(&rgb)?;
    Ok(bytes)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn jpeg_and_png_carry_their_magic_bytes() {
        let img = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));
        let jpeg = encode_jpeg(&img, 85).unwrap();
        assert_eq!(&jpeg[..3], &[0xFF, 0xD8, 0xFF]);

        let png = encode_png(&img).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.to_rgba8(), img);
    }

    #[test]
    fn jpeg_discards_alpha_without_blending() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([200, 40, 40, 0]));
        let jpeg = encode_jpeg(&img, 100).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap().to_rgb8();
        let px = decoded.get_pixel(8, 8);
        for (got, want) in px.0.iter().zip([200u8, 40, 40]) {
            assert!(got.abs_diff(want) <= 3, "got {:?}", px);
        }
    }
}
