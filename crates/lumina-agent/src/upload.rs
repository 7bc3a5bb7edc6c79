//! Reading image files for `/upload`.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Largest upload accepted from disk.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Read an image file and work out its MIME type.
pub fn read_image(path: &Path) -> Result<(Vec<u8>, String)> {
    let data = std::fs::read(path)
        .with_context(|| format!("사진을 읽을 수 없습니다: {}", path.display()))?;
    if data.is_empty() {
        bail!("빈 파일입니다: {}", path.display());
    }
    if data.len() > MAX_UPLOAD_BYTES {
        bail!(
            "사진이 너무 큽니다 ({} bytes, 최대 {MAX_UPLOAD_BYTES} bytes)",
            data.len()
        );
    }
    let Some(mime_type) = sniff_mime(&data).or_else(|| mime_from_extension(path)) else {
        bail!("지원하지 않는 이미지 형식입니다 (jpg, png, webp, gif)");
    };
    Ok((data, mime_type.to_string()))
}

/// MIME type from the file's magic bytes.
pub fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
