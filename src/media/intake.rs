/// Photo intake: validate and load the user's source image
///
/// Intake happens in two steps. A cheap synchronous gate rejects files whose
/// extension does not map to a supported format, so a dropped text file is
/// ignored without touching any state. Accepted candidates are then read
/// asynchronously and their actual content is sniffed, which catches files
/// with a lying extension before they reach the editing service.

use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::ImageFormat;

use crate::state::data::SourceImage;

/// Formats the editing service accepts as input
const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::WebP,
];

/// Synchronous gate: does this path's extension name a supported format?
///
/// Anything else is silently ignored by the caller. No file I/O happens here.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(ImageFormat::from_extension)
        .map(|format| ACCEPTED_FORMATS.contains(&format))
        .unwrap_or(false)
}

/// Load a photo from disk and build its in-memory representation
///
/// Reads the whole file, sniffs the real format from the bytes, and returns
/// the bytes together with a display-ready preview handle. The bytes are
/// forwarded as-is later; no resizing or re-encoding is performed.
pub async fn load_image(path: PathBuf) -> Result<SourceImage, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let format = sniff_format(&bytes)
        .map_err(|e| format!("{} is not a usable image: {}", path.display(), e))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    let preview = Handle::from_bytes(bytes.clone());

    Ok(SourceImage {
        file_name,
        path,
        mime_type: format.to_mime_type(),
        bytes,
        preview,
    })
}

/// Identify the content's format and require it to be one we accept
fn sniff_format(bytes: &[u8]) -> Result<ImageFormat, String> {
    let format = image::guess_format(bytes)
        .map_err(|e| format!("unrecognized image data ({})", e))?;

    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(format!("unsupported format {:?}", format));
    }

    Ok(format)
}
