use forthefit_core::{
    genai::{self, GenerateContentRequest, GenerateContentResponse, ImageInput},
    query::{append_query, encoded_pair},
    tryon,
};

use gloo_net::http::Request;
use thiserror::Error;

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// Baked in at build time; the app ships without any backend of its own.
const API_KEY: &str = match option_env!("FORTHEFIT_API_KEY") {
    Some(key) => key,
    None => "",
};

/// Client for the external generation capability. The service is opaque to
/// the rest of the app: two images in, one displayable image out.
#[derive(Clone, Copy)]
pub struct TryOnApi {
    url: &'static str,
    api_key: &'static str,
}

impl TryOnApi {
    pub const fn new(url: &'static str, api_key: &'static str) -> Self {
        Self { url, api_key }
    }

    pub fn from_env() -> Result<Self> {
        if API_KEY.is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self::new(DEFAULT_API_URL, API_KEY))
    }

    /// Composes the person and outfit images into a single try-on image,
    /// returned as an inline `data:` URI.
    pub async fn generate_try_on(
        &self,
        person: &ImageInput,
        outfit: &ImageInput,
    ) -> Result<String> {
        let request = GenerateContentRequest::try_on(person, outfit);
        let url = append_query(
            format!("{}/models/{}:generateContent", self.url, genai::TRY_ON_MODEL),
            encoded_pair("key", self.api_key),
        );
        let response = Request::post(&url).json(&request)?.send().await?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("try-on request failed with status {status}");
            return Err(Error::Api(
                genai::error_description(&body).unwrap_or_else(|| tryon::GENERIC_FAILURE.into()),
            ));
        }
        let response: GenerateContentResponse = response.json().await?;
        response.first_image_data_uri().ok_or(Error::NoImage)
    }
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("{0}")]
    Api(String),
    #[error("the generation service is not configured with an API key")]
    MissingApiKey,
    #[error("the generation service returned no image")]
    NoImage,
}
