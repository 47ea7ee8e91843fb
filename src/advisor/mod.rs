mod client;
mod parsing;
mod prompts;

use thiserror::Error;

// ===== MODEL CONFIGURATION =====

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Used whenever model discovery fails or lists nothing usable.
pub const DEFAULT_MODEL: &str = "gemini-pro";

// Ordered preference list, newer/faster models first. Matching is substring
// containment against the listed identifiers, so a preference also matches
// longer names that embed it.
pub const MODEL_PREFERENCES: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-pro",
    "gemini-1.0-pro",
];

// ===== PROVIDER ERRORS =====

#[derive(Debug, Error)]
pub enum GeminiError {
    /// The generation endpoint answered with a non-success status.
    #[error("Gemini API Error: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A success response without the expected candidates/content/parts path.
    #[error("Failed to parse AI response")]
    MalformedResponse,

    /// Transport-level failure (connect, timeout, body decode).
    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

// ===== PUBLIC API =====

pub use client::{select_best_model, GeminiClient};
pub use prompts::build_analysis_prompt;
