/// Wire format for the generateContent REST endpoint
///
/// Request and response bodies share the part/inline-data shapes, so the
/// same structs serve both directions. Field names follow the REST API's
/// camelCase convention. A response part carries either inline image data
/// or text (or, degenerately, neither); classification of those parts lives
/// in the client.

use serde::{Deserialize, Serialize};

use super::EditRequest;

/// Top-level request body for models/{model}:generateContent
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// Declares which modalities the response may contain
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

/// An ordered list of parts making up one message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One typed content part: inline data, text, or neither
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Base64 payload plus its MIME type tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Top-level response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl Part {
    pub fn inline(mime_type: String, data: String) -> Self {
        Self {
            inline_data: Some(InlineData { mime_type, data }),
            text: None,
        }
    }

    pub fn text(text: String) -> Self {
        Self {
            inline_data: None,
            text: Some(text),
        }
    }
}

impl GenerateContentRequest {
    /// Payload for one edit: the inline source image followed by the
    /// instruction text, with both response modalities declared.
    pub fn edit(request: &EditRequest, instruction: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::inline(request.mime_type.clone(), request.data_base64.clone()),
                    Part::text(instruction),
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            },
        }
    }
}

impl GenerateContentResponse {
    /// Flatten to the first candidate's parts; empty when the response
    /// carried no usable content at all.
    pub fn into_parts(self) -> Vec<Part> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::params::AspectRatio;

    fn request() -> EditRequest {
        EditRequest {
            mime_type: "image/jpeg".to_string(),
            data_base64: "QUJD".to_string(),
            prompt: "navy suit".to_string(),
            aspect_ratio: AspectRatio::Square,
        }
    }

    #[test]
    fn request_serializes_with_camel_case_fields() {
        let payload = GenerateContentRequest::edit(&request(), "do the thing".to_string());
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains("\"inlineData\""));
        assert!(json.contains("\"mimeType\":\"image/jpeg\""));
        assert!(json.contains("\"data\":\"QUJD\""));
        assert!(json.contains("\"responseModalities\":[\"IMAGE\",\"TEXT\"]"));
        // The image part comes before the instruction part
        assert!(json.find("inlineData").unwrap() < json.find("do the thing").unwrap());
    }

    #[test]
    fn request_parts_omit_absent_fields() {
        let payload = GenerateContentRequest::edit(&request(), "instruction".to_string());
        let json = serde_json::to_string(&payload).unwrap();

        // An inline-data part must not serialize a null text field and
        // vice versa, or the API rejects the payload
        assert!(!json.contains("null"));
    }

    #[test]
    fn response_parses_image_and_text_parts() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                    ]
                }
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let parts = response.into_parts();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text.as_deref(), Some("here you go"));
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "aGVsbG8=");
    }

    #[test]
    fn response_without_candidates_flattens_to_no_parts() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_parts().is_empty());
    }

    #[test]
    fn response_candidate_without_content_flattens_to_no_parts() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert!(response.into_parts().is_empty());
    }
}
