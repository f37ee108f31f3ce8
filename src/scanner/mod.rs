//! 入力画像の読み込み
//!
//! 拡張子からMIMEタイプを決め、長辺が上限を超える場合だけJPEGで再エンコードする。

use crate::analyzer::ImageInput;
use crate::error::{StoryboardError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
];

/// 拡張子からMIMEタイプを判定（大文字小文字は区別しない）
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// 画像ファイルを読み込んで送信用の ImageInput にする
///
/// `max_image_size` が0なら縮小しない。
pub fn load_image(path: &Path, max_image_size: u32) -> Result<ImageInput> {
    if !path.is_file() {
        return Err(StoryboardError::FileNotFound(path.display().to_string()));
    }

    let mime_type = mime_type_for(path).ok_or_else(|| {
        StoryboardError::ImageLoad(format!(
            "対応していない画像形式です: {} (jpg/jpeg/png/webp)",
            path.display()
        ))
    })?;

    let bytes = std::fs::read(path)?;
    let (bytes, mime_type) = downscale_if_needed(bytes, mime_type, max_image_size)?;

    Ok(ImageInput::from_bytes(mime_type, &bytes))
}

fn downscale_if_needed(
    bytes: Vec<u8>,
    mime_type: &'static str,
    max_image_size: u32,
) -> Result<(Vec<u8>, &'static str)> {
    let image = image::load_from_memory(&bytes)
        .map_err(|e| StoryboardError::ImageLoad(format!("画像のデコードに失敗: {}", e)))?;

    let (width, height) = image.dimensions();
    if max_image_size == 0 || width.max(height) <= max_image_size {
        return Ok((bytes, mime_type));
    }

    let resized = image.resize(max_image_size, max_image_size, FilterType::Lanczos3);
    debug!(
        from = %format!("{}x{}", width, height),
        to = %format!("{}x{}", resized.width(), resized.height()),
        "画像を縮小"
    );

    let mut out = Vec::new();
    DynamicImage::ImageRgb8(resized.to_rgb8())
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Jpeg)
        .map_err(|e| StoryboardError::ImageLoad(format!("JPEGエンコードに失敗: {}", e)))?;

    Ok((out, "image/jpeg"))
}
