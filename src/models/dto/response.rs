use serde::Serialize;

use crate::{
    models::domain::{BatchQuota, GenerationAllowance, Question},
    services::quota::QuotaStatus,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponseDto {
    pub questions: Vec<Question>,
    pub critical_failures: usize,
    pub flagged: usize,
}

impl ValidateResponseDto {
    pub fn from_questions(questions: Vec<Question>) -> Self {
        let critical_failures = questions.iter().filter(|q| q.is_critical_failure()).count();
        let flagged = questions
            .iter()
            .filter(|q| q.validation.as_ref().is_some_and(|v| v.is_flagged()))
            .count();
        Self {
            questions,
            critical_failures,
            flagged,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaResponseDto {
    pub quota: BatchQuota,
    pub allowance: GenerationAllowance,
    pub status: QuotaStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponseDto {
    pub prompt: String,
    pub quota: BatchQuota,
    pub coverage_gaps: Vec<String>,
}
