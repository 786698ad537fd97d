//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use tracing::info;

use crate::assessment::models::{EvaluationRequest, QuestionSet, ReadinessEvaluation};
use crate::errors::AppError;
use crate::extract::FormFields;
use crate::state::AppState;

/// POST /generate-questions
///
/// Form fields: `role`, `experience`. Always answers with three questions,
/// falling back to generic ones when the model is unavailable.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    mut form: FormFields,
) -> Result<Json<QuestionSet>, AppError> {
    let role = form.required_non_blank("role")?;
    let experience = form.required_non_blank("experience")?;

    info!("Generating questions for role={role:?} experience={experience:?}");
    let questions = state.assessor.generate_questions(&role, &experience).await;

    Ok(Json(questions))
}

/// POST /calculate-score
///
/// Form fields: `role`, `experience`, `tech_answers`, `resume_text`,
/// `comm_text` (optional, default empty), `portfolio_url` (optional).
pub async fn handle_calculate_score(
    State(state): State<AppState>,
    mut form: FormFields,
) -> Result<Json<ReadinessEvaluation>, AppError> {
    let request = EvaluationRequest {
        role: form.required_non_blank("role")?,
        experience: form.required_non_blank("experience")?,
        tech_answers: form.required("tech_answers")?,
        resume_text: form.required("resume_text")?,
        comm_text: form.optional("comm_text").unwrap_or_default(),
        portfolio_url: form.optional("portfolio_url"),
    };

    info!(
        "Evaluating readiness for role={:?} experience={:?}",
        request.role, request.experience
    );
    let evaluation = state.assessor.evaluate(&request).await;

    Ok(Json(evaluation))
}
