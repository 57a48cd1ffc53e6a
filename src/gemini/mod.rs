/// Gemini image editing service integration
///
/// This module owns everything between "the user pressed Generate" and
/// "we have bytes or an error":
/// - The request parameters handed over by the UI (this file)
/// - The fixed instruction template (prompt.rs)
/// - The REST wire format for generateContent (wire.rs)
/// - The HTTP client, response classification, and error normalization (client.rs)

pub mod client;
pub mod prompt;
pub mod wire;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::state::data::SourceImage;
use crate::state::params::AspectRatio;

/// Model used for all edits
pub const MODEL_NAME: &str = "gemini-2.5-flash-image-preview";

/// One edit submission: the encoded source photo plus the user's direction
///
/// Constructed fresh per submission. The prompt is carried verbatim;
/// trimming only ever happens for the submit gate, never here.
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// MIME type of the source image (e.g., "image/jpeg")
    pub mime_type: String,
    /// Source image bytes in transport encoding
    pub data_base64: String,
    /// The user's free-text request, unmodified
    pub prompt: String,
    /// Target aspect ratio for the result
    pub aspect_ratio: AspectRatio,
}

impl EditRequest {
    /// Derive the transport encoding from the retained source bytes
    pub fn from_source(source: &SourceImage, prompt: String, aspect_ratio: AspectRatio) -> Self {
        Self {
            mime_type: source.mime_type.to_string(),
            data_base64: STANDARD.encode(&source.bytes),
            prompt,
            aspect_ratio,
        }
    }
}
