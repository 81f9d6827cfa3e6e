use base64::{engine::general_purpose::STANDARD, Engine};
use debug_stub_derive::DebugStub;
use serde::{Deserialize, Serialize};

/// Model used for virtual try-on composition.
pub const TRY_ON_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Instruction sent alongside the two inline images.
pub const TRY_ON_PROMPT: &str = "Create a photorealistic virtual try-on image. \
Dress the person from the first image in the clothing item from the second \
image. Keep the person's face, pose, body shape and the background unchanged, \
and drape the garment naturally with matching lighting and shadows. Return \
only the final image.";

/// A user-selected image read into memory, ready to be inlined into a
/// generation request.
#[derive(Clone, DebugStub, PartialEq, Eq)]
pub struct ImageInput {
    #[debug_stub = "ImageBytes"]
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_image(image: &ImageInput) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: STANDARD.encode(&image.data),
            }),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Builds the try-on request: person image, outfit image, instruction
    /// prompt, in that order.
    pub fn try_on(person: &ImageInput, outfit: &ImageInput) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::inline_image(person),
                    Part::inline_image(outfit),
                    Part::text(TRY_ON_PROMPT),
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".into(), "TEXT".into()],
            },
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First inline image across all candidates, as a displayable `data:`
    /// URI. The payload stays base64-encoded the whole way through.
    pub fn first_image_data_uri(&self) -> Option<String> {
        let image = self
            .candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .find_map(|p| p.inline_data.as_ref());
        if image.is_none() {
            if let Some(reason) = self
                .candidates
                .iter()
                .find_map(|c| c.finish_reason.as_deref())
            {
                log::warn!("generation finished without image data: {reason}");
            }
        }
        image.map(|d| format!("data:{};base64,{}", d.mime_type, d.data))
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Human-readable description from a non-2xx response body, when the service
/// provided one.
pub fn error_description(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person() -> ImageInput {
        ImageInput::new(vec![1, 2, 3], "image/jpeg")
    }

    fn outfit() -> ImageInput {
        ImageInput::new(vec![4, 5, 6], "image/png")
    }

    #[test]
    fn try_on_request_inlines_both_images_and_prompt() {
        let request = GenerateContentRequest::try_on(&person(), &outfit());
        let value = serde_json::to_value(&request).unwrap();

        let parts = &value["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], json!("image/jpeg"));
        assert_eq!(parts[0]["inlineData"]["data"], json!("AQID"));
        assert_eq!(parts[1]["inlineData"]["mimeType"], json!("image/png"));
        assert_eq!(parts[2]["text"], json!(TRY_ON_PROMPT));
        assert_eq!(
            value["generationConfig"]["responseModalities"],
            json!(["IMAGE", "TEXT"])
        );
    }

    #[test]
    fn image_parts_do_not_serialize_an_empty_text_field() {
        let value = serde_json::to_value(Part::inline_image(&person())).unwrap();
        assert!(value.get("text").is_none());
    }

    #[test]
    fn response_extraction_finds_the_inline_image() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your try-on." },
                        { "inlineData": { "mimeType": "image/png", "data": "AAA" } }
                    ]
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(
            response.first_image_data_uri().as_deref(),
            Some("data:image/png;base64,AAA")
        );
    }

    #[test]
    fn response_without_image_yields_none() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "blocked" }] },
                "finishReason": "SAFETY"
            }]
        }))
        .unwrap();
        assert_eq!(response.first_image_data_uri(), None);

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_image_data_uri(), None);
    }

    #[test]
    fn error_description_reads_the_service_message() {
        let body = r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(error_description(body).as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn error_description_ignores_blank_or_malformed_bodies() {
        assert_eq!(error_description(r#"{"error":{"message":""}}"#), None);
        assert_eq!(error_description("not json"), None);
        assert_eq!(error_description(""), None);
    }
}
