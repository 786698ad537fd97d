//! Static stand-ins returned when the model is unavailable or its reply
//! cannot be parsed. Every value here passes `Validate`.

use crate::assessment::models::{
    ActionItem, AssessmentQuestion, ConfidenceBand, QuestionSet, ReadinessEvaluation,
    ScoreBreakdown,
};

pub fn fallback_questions(role: &str) -> QuestionSet {
    QuestionSet(vec![
        AssessmentQuestion::mcq(
            1,
            format!("Which is a key concept in {role}?"),
            ["Concept A", "Concept B", "Concept C", "Concept D"],
            0,
        ),
        AssessmentQuestion::mcq(
            2,
            format!("Standard tool for {role}?"),
            ["Tool X", "Tool Y", "Tool Z", "Tool W"],
            1,
        ),
        AssessmentQuestion::short(3, format!("Explain the core responsibility of a {role}.")),
    ])
}

const FALLBACK_PLAN: [(&str, &str); 7] = [
    (
        "Review the core fundamentals of the role",
        "A refreshed list of topics you can explain confidently",
    ),
    (
        "Solve three practice problems in your primary language",
        "Faster recall of common patterns under time pressure",
    ),
    (
        "Rewrite résumé bullets to lead with measurable impact",
        "A résumé that highlights outcomes instead of duties",
    ),
    (
        "Record yourself answering two behavioral questions",
        "Clearer, more structured spoken answers",
    ),
    (
        "Polish one portfolio project and document it",
        "A project you can walk an interviewer through end to end",
    ),
    (
        "Run a timed mock interview with a peer",
        "Concrete feedback on weak spots to target",
    ),
    (
        "Revisit the gaps found this week and plan next steps",
        "A focused study plan for the following weeks",
    ),
];

pub fn fallback_evaluation() -> ReadinessEvaluation {
    ReadinessEvaluation {
        overall_score: 60,
        confidence_band: ConfidenceBand::Borderline,
        failure_reason: "Answers show basic familiarity but not enough depth to stand out \
            against other candidates."
            .to_string(),
        scoring_explanation: vec![
            "Technical answers cover the basics but lack depth.".to_string(),
            "Résumé is readable but light on measurable outcomes.".to_string(),
            "Communication and portfolio evidence are moderate.".to_string(),
        ],
        breakdown: ScoreBreakdown {
            technical: 62,
            resume: 60,
            communication: 58,
            portfolio: 60,
        },
        strengths: vec![
            "Basic knowledge present".to_string(),
            "Resume is readable".to_string(),
        ],
        gaps: vec![
            "Lacks depth in technical topics".to_string(),
            "Communication needs focus".to_string(),
        ],
        action_plan: FALLBACK_PLAN
            .iter()
            .zip(1u8..)
            .map(|((task, outcome), day)| ActionItem {
                day,
                task: task.to_string(),
                outcome: outcome.to_string(),
            })
            .collect(),
        timeline: "3 weeks".to_string(),
    }
}
