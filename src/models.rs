use serde::{Deserialize, Serialize};

// ===== ANALYSIS REQUEST TYPES =====

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
    #[serde(default)]
    pub overview: Overview,
}

/// One course module grade, as sent by the dashboard. `value` is out of 20
/// by convention; nothing enforces the range.
#[derive(Debug, Deserialize)]
pub struct GradeEntry {
    pub name: String,
    pub value: f64,
    pub coef: f64,
}

/// Semester summary computed client-side. Missing fields render as "N/A"
/// in the prompt.
#[derive(Debug, Default, Deserialize)]
pub struct Overview {
    pub average: Option<f64>,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
}

// ===== ANALYSIS RESPONSE TYPES =====

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
