use actix_web::web;
use image::{GenericImageView, imageops::FilterType};
use webp::Encoder;

use crate::config::ImageConfig;
use crate::error::AppError;
use crate::storage::ObjectStorage;
use crate::utils::{MAX_IMAGE_BYTES, UploadedFile, storage_path};

pub const WEBP_CONTENT_TYPE: &str = "image/webp";

/// Decodes any supported format, caps the width and re-encodes as lossy WebP.
pub fn compress_to_webp(bytes: &[u8], config: ImageConfig) -> Result<Vec<u8>, AppError> {
    let mut img = image::load_from_memory(bytes)
        .map_err(|e| AppError::Image(format!("Gambar tidak dapat dibaca: {}", e)))?;

    let (w, h) = img.dimensions();
    if w > config.max_width {
        let new_height = ((h as u64 * config.max_width as u64) / w as u64).max(1) as u32;
        img = img.resize(config.max_width, new_height, FilterType::Lanczos3);
    }

    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let encoder = Encoder::from_rgb(&rgb, w, h);
    Ok(encoder.encode(config.webp_quality).to_vec())
}

/// Keeps the image parts among `files`. Non-images are skipped, oversized images fail the request.
pub fn accepted_images<'a>(files: Vec<&'a UploadedFile>) -> Result<Vec<&'a UploadedFile>, AppError> {
    let mut images = Vec::with_capacity(files.len());
    for file in files {
        if !file.is_image() {
            log::warn!(
                "File {} ({}) dilewati: bukan gambar",
                file.filename.as_deref().unwrap_or("-"),
                file.content_type
            );
            continue;
        }
        if file.bytes.len() > MAX_IMAGE_BYTES {
            return Err(AppError::validation("Setiap gambar maksimal 5MB!"));
        }
        images.push(file);
    }
    Ok(images)
}

/// Compresses and uploads one file at a time, returning public urls in order.
/// Stops at the first failure; objects already written stay in the bucket.
pub async fn upload_images(
    storage: &dyn ObjectStorage,
    files: &[&UploadedFile],
    prefix: &str,
    config: ImageConfig,
) -> Result<Vec<String>, AppError> {
    let mut uploaded: Vec<String> = Vec::with_capacity(files.len());

    for file in files {
        let raw = file.bytes.clone();
        let webp = web::block(move || compress_to_webp(&raw, config)).await??;
        let path = storage_path(prefix);

        if let Err(e) = storage.upload(&path, webp, WEBP_CONTENT_TYPE).await {
            log::error!("Upload {} gagal: {}", path, e);
            if !uploaded.is_empty() {
                log::warn!("Upload dibatalkan, file yatim tersisa: {:?}", uploaded);
            }
            return Err(e.into());
        }
        uploaded.push(path);
    }

    Ok(uploaded.iter().map(|p| storage.public_url(p)).collect())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, RgbImage};

    pub fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 7) as u8, (y * 13) as u8, 128])
        });
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }
}
