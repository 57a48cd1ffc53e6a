/// Export the edited result to disk
///
/// The result bytes are written exactly as the service returned them;
/// choosing where they go is the user's call via a native save dialog.

use std::path::PathBuf;

/// Default name offered in the save dialog
pub const DEFAULT_FILE_NAME: &str = "generated-image.png";

/// Ask the user where to save the edited image, then write it
///
/// Returns `Ok(None)` when the dialog is dismissed. The dialog starts in the
/// user's pictures directory when one exists.
pub async fn save_image(bytes: Vec<u8>) -> Result<Option<PathBuf>, String> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Save Edited Image")
        .set_file_name(DEFAULT_FILE_NAME);

    if let Some(pictures) = dirs::picture_dir() {
        dialog = dialog.set_directory(pictures);
    }

    let handle = match dialog.save_file().await {
        Some(handle) => handle,
        None => return Ok(None),
    };

    let path = handle.path().to_path_buf();

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| format!("Failed to save {}: {}", path.display(), e))?;

    println!("💾 Saved edited image to {}", path.display());

    Ok(Some(path))
}
