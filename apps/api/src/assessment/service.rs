//! Assessment Service: orchestrates prompt → model → parse → fallback.
//!
//! Flow for every operation:
//!   build prompt → gateway.generate → parse_reply → value
//!                        │                 │
//!                   ProviderError      ParseError
//!                        └──── fallback ───┘
//!
//! Neither operation can fail: callers always receive a schema-valid value.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::assessment::fallback::{fallback_evaluation, fallback_questions};
use crate::assessment::models::{EvaluationRequest, QuestionSet, ReadinessEvaluation};
use crate::assessment::prompts::{build_evaluation_prompt, build_question_prompt};
use crate::llm_client::parser::{parse_reply, Validate};
use crate::llm_client::ModelGateway;

#[derive(Clone)]
pub struct AssessmentService {
    gateway: Arc<dyn ModelGateway>,
}

impl AssessmentService {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn generate_questions(&self, role: &str, experience: &str) -> QuestionSet {
        let prompt = build_question_prompt(role, experience);
        self.generate_or_fallback("generate_questions", &prompt, || fallback_questions(role))
            .await
    }

    pub async fn evaluate(&self, request: &EvaluationRequest) -> ReadinessEvaluation {
        let prompt = build_evaluation_prompt(request);
        let evaluation = self
            .generate_or_fallback("evaluate", &prompt, fallback_evaluation)
            .await;

        // Reported as-is; the model's overall score is never recomputed.
        let weighted = evaluation.breakdown.weighted_total();
        if weighted != evaluation.overall_score {
            debug!(
                "evaluate: overall_score {} differs from weighted breakdown {}",
                evaluation.overall_score, weighted
            );
        }
        evaluation
    }

    /// The only place fallbacks are substituted. Makes exactly one gateway call.
    async fn generate_or_fallback<T, F>(&self, operation: &str, prompt: &str, fallback: F) -> T
    where
        T: DeserializeOwned + Validate,
        F: FnOnce() -> T,
    {
        let raw = match self.gateway.generate(prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{operation}: model call failed, serving fallback: {e}");
                return fallback();
            }
        };

        match parse_reply::<T>(&raw) {
            Ok(value) => {
                debug!("{operation}: model reply parsed ({} chars)", raw.len());
                value
            }
            Err(e) => {
                warn!("{operation}: unusable model reply, serving fallback: {e}");
                debug!(
                    "{operation}: raw reply: {:?}",
                    e.raw().chars().take(500).collect::<String>()
                );
                fallback()
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
