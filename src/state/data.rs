/// Shared data structures for the application state
///
/// These structs represent the data model that flows between the file
/// intake layer, the editing service, and the UI layer.

use iced::widget::image::Handle;
use std::path::PathBuf;

/// The photo the user has selected for editing
///
/// Created by file intake; replaced wholesale on the next selection and
/// never mutated in place. The raw bytes are retained so the transport
/// encoding can be derived at submission time without re-reading the file.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Filename only (e.g., "portrait.jpg")
    pub file_name: String,
    /// Full path to the selected file
    pub path: PathBuf,
    /// MIME type derived from the sniffed content (e.g., "image/jpeg")
    pub mime_type: &'static str,
    /// The file's bytes, exactly as read from disk
    pub bytes: Vec<u8>,
    /// Display-ready preview built from the same bytes
    pub preview: Handle,
}

/// A successfully edited image returned by the service
#[derive(Debug, Clone)]
pub struct EditedImage {
    /// Decoded result bytes, exactly as the service produced them
    pub bytes: Vec<u8>,
    /// MIME type reported by the service for the result
    pub mime_type: String,
    /// Display-ready handle over the result bytes
    pub preview: Handle,
}

impl EditedImage {
    /// Wrap the service's decoded bytes for display. No re-encoding occurs;
    /// the handle shares the exact bytes that get written on save.
    pub fn new(bytes: Vec<u8>, mime_type: String) -> Self {
        let preview = Handle::from_bytes(bytes.clone());
        Self {
            bytes,
            mime_type,
            preview,
        }
    }
}
