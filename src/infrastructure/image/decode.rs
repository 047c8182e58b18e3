//! Off-thread image decoding.

use bytes::Bytes;

use crate::domain::errors::LoadFailureReason;
use crate::domain::ports::ImageInfo;

/// Decodes `bytes` on the blocking pool and reports the dimensions.
///
/// # Errors
/// Returns `Decode` if the payload is not a supported image.
pub async fn decode_image(bytes: Bytes) -> Result<ImageInfo, LoadFailureReason> {
    let len = bytes.len();
    tokio::task::spawn_blocking(move || -> Result<ImageInfo, LoadFailureReason> {
        let img = image::load_from_memory(&bytes)
            .map_err(|e| LoadFailureReason::decode(e.to_string()))?;
        Ok(ImageInfo {
            width: img.width(),
            height: img.height(),
            bytes: len,
        })
    })
    .await
    .map_err(|e| LoadFailureReason::decode(format!("decode task panicked: {e}")))?
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Cursor;

    /// Encodes a small solid PNG.
    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 120, 200]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .expect("png encoding");
        out.into_inner()
    }
}
