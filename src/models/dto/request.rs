use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, DifficultySelector, GenerationConfig, Question, TypeSelector};

pub const MAX_BATCH_SIZE: usize = 60;

fn validate_generation_config(config: &GenerationConfig) -> Result<(), ValidationError> {
    if config.discipline.trim().is_empty() {
        return Err(ValidationError::new("discipline_required"));
    }
    if config.batch_size == 0 || config.batch_size > MAX_BATCH_SIZE {
        return Err(ValidationError::new("batch_size_out_of_range"));
    }
    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(ValidationError::new("temperature_out_of_range"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequestDto {
    #[validate(length(min = 1, message = "Raw model output is required"))]
    pub raw: String,

    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub dedup_threshold: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ValidateRequestDto {
    #[validate(length(min = 1, max = 500))]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DedupeRequestDto {
    pub questions: Vec<Question>,

    #[serde(default)]
    pub existing: Vec<Question>,

    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequestDto {
    pub question: Question,

    /// Defaults to the source question's difficulty.
    pub target_difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuotaRequestDto {
    #[validate(length(min = 1, max = 100))]
    pub discipline: String,

    pub difficulty: DifficultySelector,

    #[serde(rename = "type")]
    pub question_type: TypeSelector,

    #[validate(range(min = 1, max = 60))]
    pub batch_size: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequestDto {
    #[validate(custom(function = "validate_generation_config"))]
    pub config: GenerationConfig,

    #[serde(default)]
    pub file_context: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequestDto {
    #[validate(custom(function = "validate_generation_config"))]
    pub config: GenerationConfig,

    #[serde(default)]
    pub file_context: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CritiqueRequestDto {
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TranslateRequestDto {
    #[validate(length(min = 2, max = 50))]
    pub language: String,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
}
