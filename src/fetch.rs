/// Thumbnail fetching and decoding
///
/// Each visible slot gets its own background fetch task. The three
/// fetches for one page are independent: no ordering between their
/// completions, and a failure in one slot never touches the others.
/// The caller matches every completion against the generation it was
/// spawned for and drops stale results.

use image::imageops::FilterType;
use std::time::Duration;

use crate::error::Error;

/// Display size of a thumbnail slot, in pixels (square, aspect kept).
pub const THUMBNAIL_SIZE: u32 = 300;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A decoded, display-ready RGBA bitmap.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows.
    pub pixels: Vec<u8>,
}

/// Fetch one thumbnail and decode it for display.
///
/// Transport failures (including timeouts and HTTP error statuses) come
/// back as `Error::Network`; bodies that are not a decodable image come
/// back as `Error::InvalidImage`.
pub async fn fetch_thumbnail(url: String) -> Result<Bitmap, Error> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let bytes = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    decode_bitmap(&bytes)
}

/// Decode raw image bytes and downscale them to fit the slot.
fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap, Error> {
    let decoded = image::load_from_memory(bytes).map_err(|_| Error::InvalidImage)?;

    // Display-fit only: downscale large images, never upscale small ones.
    let fitted = if decoded.width() > THUMBNAIL_SIZE || decoded.height() > THUMBNAIL_SIZE {
        decoded.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
    } else {
        decoded
    };

    let rgba = fitted.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Bitmap {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_garbage_bytes_are_invalid_image() {
        let err = decode_bitmap(b"definitely not an image").unwrap_err();
        assert_eq!(err, Error::InvalidImage);
    }

    #[test]
    fn test_empty_body_is_invalid_image() {
        assert_eq!(decode_bitmap(&[]).unwrap_err(), Error::InvalidImage);
    }

    #[test]
    fn test_small_image_keeps_its_dimensions() {
        let bitmap = decode_bitmap(&png_bytes(10, 6)).unwrap();

        assert_eq!((bitmap.width, bitmap.height), (10, 6));
        assert_eq!(bitmap.pixels.len(), 10 * 6 * 4);
    }

    #[test]
    fn test_large_image_is_downscaled_to_fit_keeping_aspect() {
        let bitmap = decode_bitmap(&png_bytes(900, 300)).unwrap();

        assert_eq!((bitmap.width, bitmap.height), (300, 100));
        assert_eq!(bitmap.pixels.len(), 300 * 100 * 4);
    }
}
