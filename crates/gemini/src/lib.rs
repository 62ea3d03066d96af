//! Gemini REST client used as the room design generator.
//!
//! Provides the `generateContent` wire types and an HTTP client that
//! implements [`roomcraft_core::generation::DesignGenerator`].

pub mod api;
pub mod messages;

pub use api::{GeminiApiError, GeminiClient};
