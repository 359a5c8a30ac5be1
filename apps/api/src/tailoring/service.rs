//! Tailoring Service: turns a resume and a job description into a tailored resume.
//!
//! Flow per call: validate → build prompt → one provider call (time-bounded) →
//! take the first completion. Nothing is persisted and nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{ChatRequest, LlmError, TextGenerator, MODEL};
use crate::tailoring::prompts::{build_tailor_prompt, TAILOR_SYSTEM};

/// Sampling temperature for every tailoring call. Output is not byte-stable across calls.
pub const TEMPERATURE: f32 = 0.7;
/// Output cap. Longer tailored resumes come back truncated by the provider.
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

pub const MISSING_INPUT_MESSAGE: &str = "Resume and job description are required";

#[derive(Debug, Error)]
pub enum TailorError {
    /// Rejected before any provider call was made.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Provider call failed: {0}")]
    Provider(#[from] LlmError),
}

/// Stateless per call; clones share the same provider handle.
#[derive(Clone)]
pub struct TailorService {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl TailorService {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Produces a tailored resume, or a classified failure.
    ///
    /// Both inputs must be non-empty after trimming. The returned text is the
    /// provider's first completion, unchanged.
    pub async fn tailor(&self, resume: &str, job_description: &str) -> Result<String, TailorError> {
        if resume.trim().is_empty() || job_description.trim().is_empty() {
            return Err(TailorError::InvalidInput(MISSING_INPUT_MESSAGE.to_string()));
        }

        let request = ChatRequest {
            model: MODEL.to_string(),
            system: TAILOR_SYSTEM.to_string(),
            user: build_tailor_prompt(resume, job_description),
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        info!(
            "Calling provider: resume_chars={}, job_description_chars={}",
            resume.chars().count(),
            job_description.chars().count()
        );

        let response = tokio::time::timeout(self.timeout, self.generator.complete(&request))
            .await
            .map_err(|_| {
                warn!("Provider call exceeded {}s", self.timeout.as_secs());
                LlmError::Timeout(self.timeout)
            })??;

        // A missing or blank completion is a provider failure, not an empty resume.
        match response.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent.into()),
        }
    }
}
