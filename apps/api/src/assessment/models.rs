use serde::{Deserialize, Serialize};

use crate::llm_client::parser::Validate;

pub const QUESTION_COUNT: usize = 3;
pub const MCQ_OPTION_COUNT: usize = 4;
pub const ACTION_PLAN_DAYS: usize = 7;

// ────────────────────────────────────────────────────────────────────────────
// Assessment questions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Mcq,
    Short,
}

/// One generated question. `options` and `answer` exist only for MCQs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssessmentQuestion {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<u8>,
}

impl AssessmentQuestion {
    pub fn mcq(id: u32, question: impl Into<String>, options: [&str; 4], answer: u8) -> Self {
        Self {
            id,
            kind: QuestionKind::Mcq,
            question: question.into(),
            options: Some(options.iter().map(|o| o.to_string()).collect()),
            answer: Some(answer),
        }
    }

    pub fn short(id: u32, question: impl Into<String>) -> Self {
        Self {
            id,
            kind: QuestionKind::Short,
            question: question.into(),
            options: None,
            answer: None,
        }
    }
}

impl Validate for AssessmentQuestion {
    fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err(format!("question {} has empty text", self.id));
        }
        match (self.kind, &self.options, self.answer) {
            (QuestionKind::Mcq, Some(options), Some(answer)) => {
                if options.len() != MCQ_OPTION_COUNT {
                    return Err(format!(
                        "question {} must have {MCQ_OPTION_COUNT} options, got {}",
                        self.id,
                        options.len()
                    ));
                }
                if usize::from(answer) >= MCQ_OPTION_COUNT {
                    return Err(format!(
                        "question {} answer index {answer} is out of range",
                        self.id
                    ));
                }
                Ok(())
            }
            (QuestionKind::Mcq, _, _) => Err(format!(
                "mcq question {} must carry both options and answer",
                self.id
            )),
            (QuestionKind::Short, None, None) => Ok(()),
            (QuestionKind::Short, _, _) => Err(format!(
                "short question {} must not carry options or answer",
                self.id
            )),
        }
    }
}

/// The three questions returned by `/generate-questions`: two MCQs followed
/// by one short-answer question, ids 1..=3.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct QuestionSet(pub Vec<AssessmentQuestion>);

impl QuestionSet {
    const EXPECTED_KINDS: [QuestionKind; QUESTION_COUNT] =
        [QuestionKind::Mcq, QuestionKind::Mcq, QuestionKind::Short];
}

impl Validate for QuestionSet {
    fn validate(&self) -> Result<(), String> {
        if self.0.len() != QUESTION_COUNT {
            return Err(format!(
                "expected {QUESTION_COUNT} questions, got {}",
                self.0.len()
            ));
        }
        for (position, (question, expected)) in
            self.0.iter().zip(Self::EXPECTED_KINDS).enumerate()
        {
            let expected_id = position as u32 + 1;
            if question.id != expected_id {
                return Err(format!(
                    "question at position {position} has id {}, expected {expected_id}",
                    question.id
                ));
            }
            if question.kind != expected {
                return Err(format!(
                    "question {} has type {:?}, expected {expected:?}",
                    question.id, question.kind
                ));
            }
            question.validate()?;
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Readiness evaluation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfidenceBand {
    #[serde(rename = "Not Ready")]
    NotReady,
    #[serde(rename = "Borderline")]
    Borderline,
    #[serde(rename = "Interview Ready")]
    InterviewReady,
}

impl ConfidenceBand {
    /// Fixed thresholds: 0–40 / 41–70 / 71–100.
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=40 => ConfidenceBand::NotReady,
            41..=70 => ConfidenceBand::Borderline,
            _ => ConfidenceBand::InterviewReady,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub technical: u8,
    pub resume: u8,
    pub communication: u8,
    pub portfolio: u8,
}

impl ScoreBreakdown {
    /// round(0.30·technical + 0.25·resume + 0.25·communication + 0.20·portfolio)
    ///
    /// Informational only; received overall scores are never replaced by it.
    pub fn weighted_total(&self) -> u8 {
        let total = 0.30 * f64::from(self.technical)
            + 0.25 * f64::from(self.resume)
            + 0.25 * f64::from(self.communication)
            + 0.20 * f64::from(self.portfolio);
        total.round() as u8
    }

    fn scores(&self) -> [(&'static str, u8); 4] {
        [
            ("technical", self.technical),
            ("resume", self.resume),
            ("communication", self.communication),
            ("portfolio", self.portfolio),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionItem {
    pub day: u8,
    pub task: String,
    pub outcome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadinessEvaluation {
    pub overall_score: u8,
    pub confidence_band: ConfidenceBand,
    pub failure_reason: String,
    pub scoring_explanation: Vec<String>,
    pub breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub action_plan: Vec<ActionItem>,
    pub timeline: String,
}

fn check_score(name: &str, score: u8) -> Result<(), String> {
    if score > 100 {
        return Err(format!("{name} must be within 0-100, got {score}"));
    }
    Ok(())
}

fn check_len(name: &str, items: &[String], min: usize, max: usize) -> Result<(), String> {
    if items.len() < min || items.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{min}-{max}")
        };
        return Err(format!(
            "{name} must have {expected} entries, got {}",
            items.len()
        ));
    }
    Ok(())
}

impl Validate for ReadinessEvaluation {
    fn validate(&self) -> Result<(), String> {
        check_score("overall_score", self.overall_score)?;
        for (name, score) in self.breakdown.scores() {
            check_score(name, score)?;
        }

        let expected_band = ConfidenceBand::for_score(self.overall_score);
        if self.confidence_band != expected_band {
            return Err(format!(
                "confidence_band {:?} does not match overall_score {} (expected {:?})",
                self.confidence_band, self.overall_score, expected_band
            ));
        }

        check_len("scoring_explanation", &self.scoring_explanation, 2, 3)?;
        check_len("strengths", &self.strengths, 2, 2)?;
        check_len("gaps", &self.gaps, 2, 2)?;

        if self.action_plan.len() != ACTION_PLAN_DAYS {
            return Err(format!(
                "action_plan must have {ACTION_PLAN_DAYS} days, got {}",
                self.action_plan.len()
            ));
        }
        for (index, item) in self.action_plan.iter().enumerate() {
            let expected_day = index as u8 + 1;
            if item.day != expected_day {
                return Err(format!(
                    "action_plan entry {index} is day {}, expected day {expected_day}",
                    item.day
                ));
            }
        }

        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// Inputs of one readiness evaluation. Lives for a single request.
#[derive(Debug, Clone, Default)]
pub struct EvaluationRequest {
    pub role: String,
    pub experience: String,
    pub resume_text: String,
    /// Serialized by the caller (the web client sends a JSON string).
    pub tech_answers: String,
    pub comm_text: String,
    pub portfolio_url: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parser::parse_reply;
    use serde_json::json;

    fn valid_questions_json() -> serde_json::Value {
        json!([
            { "id": 1, "type": "mcq", "question": "Q1", "options": ["a", "b", "c", "d"], "answer": 0 },
            { "id": 2, "type": "mcq", "question": "Q2", "options": ["a", "b", "c", "d"], "answer": 3 },
            { "id": 3, "type": "short", "question": "Q3" }
        ])
    }

    #[test]
    fn test_short_question_serializes_without_options_or_answer() {
        let value = serde_json::to_value(AssessmentQuestion::short(3, "Explain X")).unwrap();
        assert_eq!(value, json!({ "id": 3, "type": "short", "question": "Explain X" }));
    }

    #[test]
    fn test_valid_question_set_passes() {
        let set: QuestionSet = serde_json::from_value(valid_questions_json()).unwrap();
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_question_set_rejects_wrong_length() {
        let mut value = valid_questions_json();
        value.as_array_mut().unwrap().pop();
        let set: QuestionSet = serde_json::from_value(value).unwrap();
        assert!(set.validate().unwrap_err().contains("expected 3 questions"));
    }

    #[test]
    fn test_question_set_rejects_wrong_order() {
        let mut value = valid_questions_json();
        value.as_array_mut().unwrap().swap(1, 2);
        let set: QuestionSet = serde_json::from_value(value).unwrap();
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_mcq_requires_four_options() {
        let mut question = AssessmentQuestion::mcq(1, "Q", ["a", "b", "c", "d"], 0);
        question.options.as_mut().unwrap().pop();
        assert!(question.validate().unwrap_err().contains("4 options"));
    }

    #[test]
    fn test_mcq_answer_out_of_range() {
        let question = AssessmentQuestion::mcq(1, "Q", ["a", "b", "c", "d"], 4);
        assert!(question.validate().unwrap_err().contains("out of range"));
    }

    #[test]
    fn test_short_question_with_options_is_rejected() {
        let mut question = AssessmentQuestion::short(3, "Q");
        question.options = Some(vec!["a".to_string()]);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_unknown_question_type_fails_decoding() {
        let result: Result<AssessmentQuestion, _> =
            serde_json::from_value(json!({ "id": 1, "type": "essay", "question": "Q" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_confidence_band_thresholds() {
        assert_eq!(ConfidenceBand::for_score(0), ConfidenceBand::NotReady);
        assert_eq!(ConfidenceBand::for_score(40), ConfidenceBand::NotReady);
        assert_eq!(ConfidenceBand::for_score(41), ConfidenceBand::Borderline);
        assert_eq!(ConfidenceBand::for_score(70), ConfidenceBand::Borderline);
        assert_eq!(ConfidenceBand::for_score(71), ConfidenceBand::InterviewReady);
        assert_eq!(ConfidenceBand::for_score(100), ConfidenceBand::InterviewReady);
    }

    #[test]
    fn test_confidence_band_uses_display_names() {
        assert_eq!(
            serde_json::to_value(ConfidenceBand::InterviewReady).unwrap(),
            json!("Interview Ready")
        );
        let band: ConfidenceBand = serde_json::from_value(json!("Not Ready")).unwrap();
        assert_eq!(band, ConfidenceBand::NotReady);
    }

    #[test]
    fn test_weighted_total() {
        let breakdown = ScoreBreakdown {
            technical: 80,
            resume: 70,
            communication: 70,
            portfolio: 50,
        };
        // 24 + 17.5 + 17.5 + 10
        assert_eq!(breakdown.weighted_total(), 69);
    }

    fn sample_evaluation() -> ReadinessEvaluation {
        ReadinessEvaluation {
            overall_score: 75,
            confidence_band: ConfidenceBand::InterviewReady,
            failure_reason: "Limited production experience.".to_string(),
            scoring_explanation: vec!["Solid answers".to_string(), "Clear résumé".to_string()],
            breakdown: ScoreBreakdown {
                technical: 80,
                resume: 75,
                communication: 70,
                portfolio: 72,
            },
            strengths: vec!["A".to_string(), "B".to_string()],
            gaps: vec!["C".to_string(), "D".to_string()],
            action_plan: (1..=7)
                .map(|day| ActionItem {
                    day,
                    task: format!("task {day}"),
                    outcome: format!("outcome {day}"),
                })
                .collect(),
            timeline: "1 week".to_string(),
        }
    }

    #[test]
    fn test_valid_evaluation_passes() {
        assert!(sample_evaluation().validate().is_ok());
    }

    #[test]
    fn test_overall_score_is_not_reconciled_with_breakdown() {
        let mut evaluation = sample_evaluation();
        evaluation.overall_score = 99;
        assert_ne!(evaluation.breakdown.weighted_total(), 99);
        assert!(evaluation.validate().is_ok());
    }

    #[test]
    fn test_band_must_match_score() {
        let mut evaluation = sample_evaluation();
        evaluation.confidence_band = ConfidenceBand::NotReady;
        assert!(evaluation.validate().unwrap_err().contains("confidence_band"));
    }

    #[test]
    fn test_score_above_100_is_rejected() {
        let mut evaluation = sample_evaluation();
        evaluation.breakdown.portfolio = 101;
        assert!(evaluation.validate().unwrap_err().contains("portfolio"));
    }

    #[test]
    fn test_action_plan_must_cover_seven_days_in_order() {
        let mut evaluation = sample_evaluation();
        evaluation.action_plan.swap(0, 1);
        assert!(evaluation.validate().is_err());

        let mut evaluation = sample_evaluation();
        evaluation.action_plan.pop();
        assert!(evaluation.validate().unwrap_err().contains("7 days"));
    }

    #[test]
    fn test_strengths_must_have_two_entries() {
        let mut evaluation = sample_evaluation();
        evaluation.strengths.push("E".to_string());
        assert!(evaluation.validate().unwrap_err().contains("strengths"));
    }

    #[test]
    fn test_evaluation_survives_fenced_reply_with_prose() {
        let encoded = serde_json::to_string_pretty(&sample_evaluation()).unwrap();
        let raw = format!("Here is the evaluation you asked for.\n```json\n{encoded}\n```\nLet me know!");
        let parsed: ReadinessEvaluation = parse_reply(&raw).unwrap();
        assert_eq!(parsed, sample_evaluation());

        let parsed: ReadinessEvaluation = parse_reply(&encoded).unwrap();
        assert_eq!(parsed, sample_evaluation());
    }

    #[test]
    fn test_negative_score_fails_decoding() {
        let mut value = serde_json::to_value(sample_evaluation()).unwrap();
        value["overall_score"] = json!(-5);
        let result: Result<ReadinessEvaluation, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }
}
