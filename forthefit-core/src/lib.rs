pub mod genai;
pub mod query;
pub mod tryon;
