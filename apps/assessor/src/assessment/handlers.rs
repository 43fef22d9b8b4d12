//! Axum route handlers for the assessment API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::jd_parser::{extract_profile, parse_jd, Extraction, JobDescriptionProfile};
use crate::assessment::prompts::SAMPLE_JD;
use crate::assessment::skill_weights::{compute_skill_weights, SkillWeight};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseJdRequest {
    pub jd_text: String,
    /// Return an error instead of the fallback profile when extraction fails.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionState {
    Parsed,
    Fallback,
}

#[derive(Debug, Serialize)]
pub struct ExtractionStatus {
    pub status: ExtractionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseJdResponse {
    pub profile: JobDescriptionProfile,
    pub skill_weights: Vec<SkillWeight>,
    pub extraction: ExtractionStatus,
}

impl From<Extraction> for ParseJdResponse {
    fn from(extraction: Extraction) -> Self {
        let status = if extraction.is_fallback() {
            ExtractionState::Fallback
        } else {
            ExtractionState::Parsed
        };
        Self {
            skill_weights: compute_skill_weights(&extraction.profile.technical_skills),
            profile: extraction.profile,
            extraction: ExtractionStatus {
                status,
                reason: extraction.reason,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions_ready: bool,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jd/parse
///
/// Extracts a profile from pasted job description text.
pub async fn handle_parse_jd(
    State(state): State<AppState>,
    Json(request): Json<ParseJdRequest>,
) -> Result<Json<ParseJdResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a Job Description".to_string(),
        ));
    }

    let extraction = if request.strict {
        let profile = extract_profile(&request.jd_text, state.llm.as_ref())
            .await
            .map_err(|e| AppError::Llm(format!("JD extraction failed: {e}")))?;
        Extraction {
            profile,
            reason: None,
        }
    } else {
        parse_jd(&request.jd_text, state.llm.as_ref()).await
    };

    Ok(Json(extraction.into()))
}

/// POST /api/v1/jd/sample
///
/// Runs extraction on the built-in sample job description.
pub async fn handle_parse_sample(State(state): State<AppState>) -> Json<ParseJdResponse> {
    let extraction = parse_jd(SAMPLE_JD, state.llm.as_ref()).await;
    Json(extraction.into())
}

/// POST /api/v1/questions
///
/// Placeholder for question generation. Acknowledges the request and does nothing else.
pub async fn handle_generate_questions() -> Json<QuestionsResponse> {
    info!("Question generation requested; not available yet");
    Json(QuestionsResponse {
        questions_ready: true,
        message: "Questions will be generated in a later phase".to_string(),
    })
}
