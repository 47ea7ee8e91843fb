use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use super::parsing::{
    extract_analysis_text, generation_model_names, GenerateContentResponse, ModelListResponse,
};
use super::{GeminiError, DEFAULT_MODEL, GEMINI_API_BASE, MODEL_PREFERENCES};

// ===== MODEL SELECTION =====

/// Pick the model identifier the process will use for every generation call.
///
/// Fail-open: any failure here (HTTP error, network, decode) falls back to
/// [`DEFAULT_MODEL`] so startup always completes.
pub async fn select_best_model(api_key: &str) -> String {
    select_best_model_at(GEMINI_API_BASE, api_key).await
}

async fn select_best_model_at(base_url: &str, api_key: &str) -> String {
    tracing::info!("Fetching available Gemini models");

    let models = match fetch_generation_models(base_url, api_key).await {
        Ok(models) => models,
        Err(e) => {
            tracing::warn!(
                error = %e,
                fallback = DEFAULT_MODEL,
                "Could not list models, using the default"
            );
            return DEFAULT_MODEL.to_string();
        }
    };

    tracing::info!(models = %models.join(", "), "Available generation models");

    match pick_preferred_model(&models) {
        Some(model) => {
            tracing::info!(model = %model, "Selected model");
            model
        }
        None => {
            tracing::warn!(
                fallback = DEFAULT_MODEL,
                "No generation models listed, using the default"
            );
            DEFAULT_MODEL.to_string()
        }
    }
}

async fn fetch_generation_models(
    base_url: &str,
    api_key: &str,
) -> Result<Vec<String>, GeminiError> {
    let url = format!("{}/v1beta/models?key={}", base_url, api_key);
    let response = Client::new().get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GeminiError::Upstream { status, body });
    }

    let listing: ModelListResponse = response.json().await?;
    Ok(generation_model_names(listing))
}

/// The first model containing a preferred substring wins, scanning the
/// listing in order once per preference. Falls back to the first listed
/// model when nothing matches.
fn pick_preferred_model(models: &[String]) -> Option<String> {
    for preference in MODEL_PREFERENCES {
        if let Some(model) = models.iter().find(|m| m.contains(preference)) {
            return Some(model.clone());
        }
    }
    models.first().cloned()
}

// ===== GENERATION CLIENT =====

/// Client for the generateContent endpoint, bound to one selected model for
/// the lifetime of the process.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_base_url(GEMINI_API_BASE, api_key, model)
    }

    pub(crate) fn with_base_url(base_url: &str, api_key: &str, model: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one single-turn generation request and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let payload = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending generation request");

        let response = self.http.post(&url).json(&payload).send().await?;

        let status = response.status();
        tracing::info!(status = %status, "Gemini response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Gemini API error");
            return Err(GeminiError::Upstream { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_analysis_text(parsed).ok_or(GeminiError::MalformedResponse)
    }
}
