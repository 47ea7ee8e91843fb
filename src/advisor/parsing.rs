use serde::Deserialize;

// ===== GENERATION RESPONSE STRUCTURE =====

// Every level is optional: a 200 response with any of these missing is a
// shape violation reported by the caller, not a decode failure.
#[derive(Debug, Deserialize)]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Part {
    pub text: Option<String>,
}

// ===== MODEL LISTING STRUCTURE =====

#[derive(Debug, Deserialize)]
pub(super) struct ModelListResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ModelInfo {
    pub name: String,
    #[serde(default, rename = "supportedGenerationMethods")]
    pub supported_generation_methods: Vec<String>,
}

// ===== EXTRACTORS =====

/// Pull the generated text out of the first candidate's first content part.
pub(super) fn extract_analysis_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
}

/// Names of the listed models that can generate content, with the
/// "models/" listing prefix stripped.
pub(super) fn generation_model_names(listing: ModelListResponse) -> Vec<String> {
    listing
        .models
        .into_iter()
        .filter(|m| {
            m.supported_generation_methods
                .iter()
                .any(|method| method == "generateContent")
        })
        .map(|m| {
            m.name
                .strip_prefix("models/")
                .unwrap_or(m.name.as_str())
                .to_string()
        })
        .collect()
}
