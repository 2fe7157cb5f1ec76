use crate::types::{MediaError, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::path::Path;

/// Longest side of an encoded thumbnail, in pixels
pub const MAX_THUMBNAIL_DIMENSION: u32 = 400;

pub const THUMBNAIL_JPEG_QUALITY: u8 = 85;

/// Load a photo and return it as a downscaled JPEG data URL.
pub async fn get_image_data(image_path: impl AsRef<Path>) -> Result<String> {
    let path = image_path.as_ref().to_owned();
    if !tokio::fs::try_exists(&path).await? {
        return Err(MediaError::ImageNotFound(path));
    }

    let bytes = tokio::fs::read(&path).await?;

    // Decoding and resampling are CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || {
        let img = image::load_from_memory(&bytes)?;
        encode_thumbnail(&img)
    })
    .await?
}

/// Downscale `img` so neither side exceeds [`MAX_THUMBNAIL_DIMENSION`] and
/// encode it as `data:image/jpeg;base64,...`.
pub fn encode_thumbnail(img: &DynamicImage) -> Result<String> {
    let resized = if img.width() > MAX_THUMBNAIL_DIMENSION || img.height() > MAX_THUMBNAIL_DIMENSION
    {
        img.resize(
            MAX_THUMBNAIL_DIMENSION,
            MAX_THUMBNAIL_DIMENSION,
            FilterType::Lanczos3,
        )
    } else {
        img.clone()
    };

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, THUMBNAIL_JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&buffer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbaImage};

    fn decode(data_url: &str) -> DynamicImage {
        let payload = data_url
            .strip_prefix("data:image/jpeg;base64,")
            .expect("data URL prefix");
        let bytes = STANDARD.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn test_small_image_keeps_size() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(30, 40));
        let url = encode_thumbnail(&img).unwrap();
        assert_eq!(decode(&url).dimensions(), (30, 40));
    }

    #[test]
    fn test_landscape_image_is_downscaled() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(800, 200));
        let url = encode_thumbnail(&img).unwrap();
        assert_eq!(decode(&url).dimensions(), (400, 100));
    }

    #[test]
    fn test_portrait_image_is_downscaled() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(600, 1200));
        let url = encode_thumbnail(&img).unwrap();
        assert_eq!(decode(&url).dimensions(), (200, 400));
    }
}
