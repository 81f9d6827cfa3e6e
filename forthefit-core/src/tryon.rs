use thiserror::Error;

/// Shown when the generation service fails without a usable description.
pub const GENERIC_FAILURE: &str = "An unknown error occurred. Please try again.";

/// Captions rotated in the result panel while a request is in flight.
pub const LOADING_CAPTIONS: &[&str] = &[
    "Analyzing pose...",
    "Mapping outfit to your form...",
    "Applying fabric textures...",
    "Adjusting lighting and shadows...",
    "Rendering final details...",
    "Stitching the final image...",
    "Almost showtime...",
];

/// Milliseconds between caption changes.
pub const CAPTION_INTERVAL_MS: i32 = 2500;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TryOnError {
    #[error("Please upload both your image and the outfit's image.")]
    MissingImages,
    #[error("{0}")]
    Generation(String),
}

impl TryOnError {
    /// A generation failure carrying the service's description when one is
    /// available, the generic fallback otherwise.
    pub fn generation(description: Option<String>) -> Self {
        Self::Generation(
            description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.into()),
        )
    }
}

/// What the result panel is currently showing. `Success` holds an
/// inline-displayable `data:` URI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TryOnState {
    #[default]
    Empty,
    Loading,
    Error(String),
    Success(String),
}

impl TryOnState {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Success(image) => Some(image),
            _ => None,
        }
    }

    pub fn settled(result: Result<String, TryOnError>) -> Self {
        match result {
            Ok(image) => Self::Success(image),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// Identifies one dispatched generation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(u64);

/// Monotonically increasing counter guarding against settlements of requests
/// that are no longer current. The in-flight call itself cannot be cancelled;
/// a reset instead invalidates its id so the settlement is discarded on
/// arrival.
#[derive(Clone, Debug, Default)]
pub struct RequestCounter {
    issued: u64,
}

impl RequestCounter {
    pub fn issue(&mut self) -> RequestId {
        self.issued += 1;
        RequestId(self.issued)
    }

    pub fn invalidate(&mut self) {
        self.issued += 1;
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.issued == id.0
    }
}

/// Caption for the n-th tick of the loading carousel, wrapping past the end.
pub fn loading_caption(step: usize) -> &'static str {
    LOADING_CAPTIONS[step % LOADING_CAPTIONS.len()]
}

/// Filename offered when saving a generated image.
pub fn download_filename(timestamp_ms: u64) -> String {
    format!("for-the-fit-try-on-{timestamp_ms}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_keeps_service_description() {
        let err = TryOnError::generation(Some("quota exceeded".into()));
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn generation_error_falls_back_when_description_missing_or_blank() {
        assert_eq!(TryOnError::generation(None).to_string(), GENERIC_FAILURE);
        assert_eq!(
            TryOnError::generation(Some("   ".into())).to_string(),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn validation_error_message() {
        assert_eq!(
            TryOnError::MissingImages.to_string(),
            "Please upload both your image and the outfit's image."
        );
    }

    #[test]
    fn state_settles_from_result() {
        let ok = TryOnState::settled(Ok("data:image/png;base64,AAA".into()));
        assert_eq!(ok.image(), Some("data:image/png;base64,AAA"));

        let err = TryOnState::settled(Err(TryOnError::generation(None)));
        assert_eq!(err, TryOnState::Error(GENERIC_FAILURE.into()));
    }

    #[test]
    fn state_predicates() {
        assert!(TryOnState::default().is_empty());
        assert!(TryOnState::Loading.is_loading());
        assert!(!TryOnState::Loading.is_empty());
        assert_eq!(TryOnState::Loading.image(), None);
    }

    #[test]
    fn settlement_for_current_request_is_accepted() {
        let mut requests = RequestCounter::default();
        let id = requests.issue();
        assert!(requests.is_current(id));
    }

    #[test]
    fn settlement_after_reset_is_stale() {
        let mut requests = RequestCounter::default();
        let id = requests.issue();
        requests.invalidate();
        assert!(!requests.is_current(id));
    }

    #[test]
    fn newer_request_supersedes_older_one() {
        let mut requests = RequestCounter::default();
        let first = requests.issue();
        let second = requests.issue();
        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }

    #[test]
    fn captions_wrap_around() {
        let n = LOADING_CAPTIONS.len();
        assert_eq!(loading_caption(0), LOADING_CAPTIONS[0]);
        assert_eq!(loading_caption(n - 1), LOADING_CAPTIONS[n - 1]);
        assert_eq!(loading_caption(n), LOADING_CAPTIONS[0]);
        assert_eq!(loading_caption(n + 2), LOADING_CAPTIONS[2]);
    }

    #[test]
    fn download_filename_embeds_timestamp() {
        assert_eq!(
            download_filename(1700000000000),
            "for-the-fit-try-on-1700000000000.png"
        );
    }
}
