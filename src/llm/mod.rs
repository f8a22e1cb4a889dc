pub mod client;
pub mod types;

pub use client::{GeminiClient, GenerativeClient};
pub use types::{GenerateContentRequest, GenerateContentResponse, Part, Tool, Usage};
