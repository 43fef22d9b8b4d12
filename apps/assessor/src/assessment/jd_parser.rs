//! JD Parser — extracts a structured profile from a raw job description.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::assessment::prompts::build_jd_parse_prompt;
use crate::llm_client::{extract_fenced_block, ChatModel, LlmError};

/// Seniority the role asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Fresher,
    Junior,
    Mid,
    Senior,
}

/// How hard an assessment for this role should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Structured output of JD extraction. Every field is required on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionProfile {
    pub role: String,
    pub experience_level: ExperienceLevel,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub responsibilities: Vec<String>,
    pub tools: Vec<String>,
    pub difficulty: Difficulty,
}

impl JobDescriptionProfile {
    /// The constant record substituted whenever extraction fails.
    pub fn fallback() -> Self {
        Self {
            role: "Software Engineer".to_string(),
            experience_level: ExperienceLevel::Mid,
            technical_skills: vec!["Python".to_string()],
            soft_skills: Vec::new(),
            responsibilities: Vec::new(),
            tools: Vec::new(),
            difficulty: Difficulty::Medium,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionFailed {
    #[error("model call failed: {0}")]
    Model(#[from] LlmError),

    #[error("response is not a valid profile: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result of the lenient extraction path.
///
/// `reason` is `Some` only when `profile` is the fallback record.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub profile: JobDescriptionProfile,
    pub reason: Option<String>,
}

impl Extraction {
    pub fn is_fallback(&self) -> bool {
        self.reason.is_some()
    }
}

/// Decodes a raw model response into a profile. No network.
///
/// The whole trimmed response is tried first; the first fenced block is used
/// only when that fails, so fences inside JSON string values are left alone.
pub fn parse_profile(text: &str) -> Result<JobDescriptionProfile, serde_json::Error> {
    let text = text.trim();
    serde_json::from_str(text).or_else(|err| {
        let block = extract_fenced_block(text);
        if block.len() == text.len() {
            return Err(err);
        }
        serde_json::from_str(block)
    })
}

/// Strict extraction: one model call, any failure is returned to the caller.
pub async fn extract_profile(
    jd_text: &str,
    llm: &dyn ChatModel,
) -> Result<JobDescriptionProfile, ExtractionFailed> {
    let prompt = build_jd_parse_prompt(jd_text);
    let response = llm.complete(&prompt).await?;
    let profile = parse_profile(&response)?;
    Ok(profile)
}

/// Parses a job description, substituting the fallback record on any failure.
pub async fn parse_jd(jd_text: &str, llm: &dyn ChatModel) -> Extraction {
    match extract_profile(jd_text, llm).await {
        Ok(profile) => {
            info!(
                "JD parsed: role={:?}, technical_skills={}",
                profile.role,
                profile.technical_skills.len()
            );
            Extraction {
                profile,
                reason: None,
            }
        }
        Err(e) => {
            warn!("JD extraction failed, using fallback profile: {e}");
            Extraction {
                profile: JobDescriptionProfile::fallback(),
                reason: Some(e.to_string()),
            }
        }
    }
}
