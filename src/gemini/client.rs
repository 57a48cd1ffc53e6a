/// HTTP client and response classification for the editing service
///
/// One outbound call per edit, no retries, no streaming, no timeout. Every
/// way the call can fail collapses into [`EditError`], and the UI only ever
/// sees the rendered user message.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use super::wire::{GenerateContentRequest, InlineData, Part};
use super::{prompt, EditRequest, MODEL_NAME};
use crate::state::data::EditedImage;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Everything that can go wrong between submit and classified result
#[derive(Debug, Error)]
pub enum EditError {
    #[error("GEMINI_API_KEY environment variable is not set.")]
    MissingApiKey,

    #[error("request to the image service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response from the image service: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No content returned from the API.")]
    NoContent,

    #[error("The API returned text instead of an image: {0}")]
    TextInstead(String),

    #[error("The API did not return a valid image. Please try again with a different prompt.")]
    NoImage,

    #[error("could not decode the returned image data: {0}")]
    Payload(#[from] base64::DecodeError),
}

impl EditError {
    /// Normalized message shown in the result area. Every failure between
    /// dispatch and classification funnels through this one prefix.
    pub fn user_message(&self) -> String {
        format!("Failed to generate image: {self}")
    }
}

/// The service boundary: anything that can turn an [`EditRequest`] into an
/// edited image. The production implementation is [`GeminiClient`]; tests
/// substitute their own.
#[async_trait]
pub trait ImageEditor: Send + Sync {
    async fn edit_image(&self, request: EditRequest) -> Result<EditedImage, EditError>;
}

/// Client for the Gemini generateContent endpoint
///
/// Holds the process-wide reqwest client and the API key. Constructed once,
/// lazily, on the first submission and reused for the process lifetime.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Read the credential from the environment. Absence surfaces here, on
    /// first use, as a regular edit failure rather than a startup check.
    pub fn from_env() -> Result<Self, EditError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| EditError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    async fn generate(&self, payload: &GenerateContentRequest) -> Result<Vec<Part>, EditError> {
        let url = format!(
            "{API_BASE}/models/{MODEL_NAME}:generateContent?key={}",
            self.api_key
        );

        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(EditError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: super::wire::GenerateContentResponse = serde_json::from_str(&body)?;
        Ok(response.into_parts())
    }
}

#[async_trait]
impl ImageEditor for GeminiClient {
    async fn edit_image(&self, request: EditRequest) -> Result<EditedImage, EditError> {
        let instruction = prompt::master_instruction(&request.prompt, request.aspect_ratio);
        let payload = GenerateContentRequest::edit(&request, instruction);

        println!(
            "📤 Requesting {} edit from {} ({} source)",
            request.aspect_ratio, MODEL_NAME, request.mime_type
        );

        let parts = self.generate(&payload).await?;
        let image = classify(&parts)?;
        let bytes = STANDARD.decode(image.data.as_bytes())?;

        println!("🖼️  Received edited image: {} bytes, {}", bytes.len(), image.mime_type);

        Ok(EditedImage::new(bytes, image.mime_type.clone()))
    }
}

/// Classify a response's parts into an image or a failure
///
/// Order matters: an empty part list means the service returned nothing at
/// all; otherwise the first image part wins; otherwise any text part is the
/// service explaining in words why it produced no image.
fn classify(parts: &[Part]) -> Result<&InlineData, EditError> {
    if parts.is_empty() {
        return Err(EditError::NoContent);
    }

    if let Some(image) = parts.iter().find_map(|part| {
        part.inline_data
            .as_ref()
            .filter(|data| data.mime_type.starts_with("image/"))
    }) {
        return Ok(image);
    }

    if let Some(text) = parts.iter().find_map(|part| part.text.as_ref()) {
        return Err(EditError::TextInstead(text.clone()));
    }

    Err(EditError::NoImage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn image_part(mime_type: &str, data: &str) -> Part {
        Part::inline(mime_type.to_string(), data.to_string())
    }

    #[test]
    fn classify_returns_first_image_part() {
        let parts = vec![
            Part::text("commentary".to_string()),
            image_part("image/png", "Zmlyc3Q="),
            image_part("image/png", "c2Vjb25k"),
        ];

        let image = classify(&parts).unwrap();
        assert_eq!(image.data, "Zmlyc3Q=");
    }

    #[test]
    fn classify_skips_non_image_inline_data() {
        let parts = vec![
            image_part("application/octet-stream", "bm9wZQ=="),
            image_part("image/webp", "eWVz"),
        ];

        let image = classify(&parts).unwrap();
        assert_eq!(image.mime_type, "image/webp");
    }

    #[test]
    fn classify_embeds_text_reply_verbatim() {
        let parts = vec![Part::text("cannot process faces".to_string())];

        let err = classify(&parts).unwrap_err();
        assert!(matches!(&err, EditError::TextInstead(text) if text == "cannot process faces"));
        assert!(err.user_message().contains("cannot process faces"));
    }

    #[test]
    fn classify_reports_empty_response() {
        let err = classify(&[]).unwrap_err();
        assert!(matches!(err, EditError::NoContent));
    }

    #[test]
    fn classify_reports_contentless_parts() {
        let parts = vec![Part::default()];

        let err = classify(&parts).unwrap_err();
        assert!(matches!(err, EditError::NoImage));
    }

    #[test]
    fn classification_works_on_parsed_response_bodies() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}]
                }
            }]
        }"#;

        let response: super::super::wire::GenerateContentResponse =
            serde_json::from_str(body).unwrap();
        let parts = response.into_parts();

        let image = classify(&parts).unwrap();
        assert_eq!(STANDARD.decode(&image.data).unwrap(), b"hello");
    }

    #[test]
    fn user_message_carries_the_normalization_prefix() {
        for err in [EditError::NoContent, EditError::NoImage, EditError::MissingApiKey] {
            assert!(err.user_message().starts_with("Failed to generate image: "));
        }
    }
}
