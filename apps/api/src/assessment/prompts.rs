// All LLM prompt templates for the Assessment module.
// Templates are filled with `llm_client::prompts::render`.

use crate::assessment::models::EvaluationRequest;
use crate::llm_client::prompts::render;

/// Résumé text beyond this many characters is dropped from the prompt.
pub const RESUME_PROMPT_CHAR_LIMIT: usize = 2000;
pub const PORTFOLIO_NOT_PROVIDED: &str = "Not provided";

/// Question generation prompt. Replace: {role}, {experience}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate interview assessment questions for a {experience} candidate applying for a {role} position.

Provide:
- Exactly 2 technical multiple-choice questions (MCQs), each with exactly 4 options and the zero-based index of the correct option.
- Exactly 1 short-answer conceptual question asking the candidate to explain a concept in 2-3 lines.

Return a JSON ARRAY with this EXACT schema (no extra fields, no extra items):
[
  { "id": 1, "type": "mcq", "question": "...", "options": ["...", "...", "...", "..."], "answer": 0 },
  { "id": 2, "type": "mcq", "question": "...", "options": ["...", "...", "...", "..."], "answer": 1 },
  { "id": 3, "type": "short", "question": "..." }
]

HARD RULES:
1. "answer" is an integer from 0 to 3
2. The "short" question has no "options" and no "answer"
3. Questions must match the seniority implied by "{experience}""#;

/// Readiness evaluation prompt.
/// Replace: {role}, {experience}, {resume_text}, {tech_answers}, {comm_text}, {portfolio_url}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate a candidate's interview readiness for the role: {role} ({experience}).

INPUTS:
- Resume Text: {resume_text}
- Technical Answers: {tech_answers}
- Communication Transcript: {comm_text}
- Portfolio URL: {portfolio_url}

TASKS:
1. Score Technical Skills (0-100)
2. Score Resume Quality (0-100)
3. Score Communication (0-100)
4. Score Portfolio/Proof (0-100)
5. Calculate the weighted overall score: round(0.30*technical + 0.25*resume + 0.25*communication + 0.20*portfolio)
6. Classify the overall score into a confidence band: 0-40 "Not Ready", 41-70 "Borderline", 71-100 "Interview Ready"
7. State the single most likely reason this candidate would be rejected, in one sentence
8. Explain the score in 2-3 short bullets
9. List exactly 2 key strengths
10. List exactly 2 key gaps
11. Provide a 7-day action plan: one entry per day (day 1 to 7) with a concrete task and its expected outcome
12. Estimate the timeline to be interview ready

Return a JSON OBJECT with this EXACT schema (no extra fields):
{
  "overall_score": 0,
  "confidence_band": "Not Ready" | "Borderline" | "Interview Ready",
  "failure_reason": "...",
  "scoring_explanation": ["...", "..."],
  "breakdown": { "technical": 0, "resume": 0, "communication": 0, "portfolio": 0 },
  "strengths": ["...", "..."],
  "gaps": ["...", "..."],
  "action_plan": [
    { "day": 1, "task": "...", "outcome": "..." },
    { "day": 2, "task": "...", "outcome": "..." },
    { "day": 3, "task": "...", "outcome": "..." },
    { "day": 4, "task": "...", "outcome": "..." },
    { "day": 5, "task": "...", "outcome": "..." },
    { "day": 6, "task": "...", "outcome": "..." },
    { "day": 7, "task": "...", "outcome": "..." }
  ],
  "timeline": "..."
}"#;

pub fn build_question_prompt(role: &str, experience: &str) -> String {
    render(
        QUESTION_PROMPT_TEMPLATE,
        &[("role", role), ("experience", experience)],
    )
}

pub fn build_evaluation_prompt(request: &EvaluationRequest) -> String {
    let resume_text = truncate_chars(&request.resume_text, RESUME_PROMPT_CHAR_LIMIT);
    let portfolio_url = request
        .portfolio_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(PORTFOLIO_NOT_PROVIDED);

    render(
        EVALUATION_PROMPT_TEMPLATE,
        &[
            ("role", request.role.as_str()),
            ("experience", request.experience.as_str()),
            ("resume_text", resume_text),
            ("tech_answers", request.tech_answers.as_str()),
            ("comm_text", request.comm_text.as_str()),
            ("portfolio_url", portfolio_url),
        ],
    )
}

/// Returns at most the first `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
