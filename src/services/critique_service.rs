use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::PipelineSettings,
    constants::prompts::{CRITIQUE_INSTRUCTIONS, CRITIQUE_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::domain::{question::SuggestedRewrite, Question},
    repositories::QuestionRepository,
    services::{
        critique_policy::{apply_critique, apply_rewrite, CritiqueOutcome, CritiqueVerdict},
        model_service::{CompletionRequest, ModelClient},
        output_parser::strip_fences,
        question_validator::validate_question,
    },
};

static SCORE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)SCORE:\s*(\d+)").expect("SCORE_LINE is a valid regex pattern"));

const CRITIQUE_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CritiqueResult {
    pub question: Question,
    pub outcome: CritiqueOutcome,
}

fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Reads a critique response. Malformed JSON falls back to a `SCORE: n`
/// line with the raw text as the critique; no score at all is an error.
pub fn parse_verdict(raw: &str) -> AppResult<CritiqueVerdict> {
    let cleaned = strip_fences(raw);

    if let Ok(value) = serde_json::from_str::<Value>(&cleaned) {
        let score = value
            .get("score")
            .and_then(|s| s.as_f64().or_else(|| s.as_str().and_then(|t| t.trim().parse().ok())));
        if let Some(score) = score {
            let rewrite = value
                .get("rewrite")
                .filter(|r| r.is_object())
                .and_then(|r| serde_json::from_value::<SuggestedRewrite>(r.clone()).ok())
                .filter(|r| !r.question.trim().is_empty());
            return Ok(CritiqueVerdict {
                score: clamp_score(score),
                critique: value
                    .get("critique")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                rewrite,
                changes: value.get("changes").and_then(Value::as_str).map(str::to_string),
            });
        }
    }

    log::warn!("Critique response was not valid JSON, falling back to score line");
    let score = SCORE_LINE
        .captures(raw)
        .and_then(|c| c[1].parse::<f64>().ok())
        .ok_or_else(|| AppError::UpstreamError("Critique response contained no score".to_string()))?;

    Ok(CritiqueVerdict {
        score: clamp_score(score),
        critique: raw.trim().to_string(),
        rewrite: None,
        changes: None,
    })
}

fn critique_prompt(question: &Question) -> String {
    let options = serde_json::to_string(&question.options).unwrap_or_default();
    format!(
        "{}\n\nType: {}\nQuestion: {}\nOptions: {}\nCorrect: {}\nSource: {}",
        CRITIQUE_INSTRUCTIONS,
        question.question_type,
        question.question,
        options,
        question.correct,
        question.source_url
    )
}

pub struct CritiqueService {
    repository: Arc<dyn QuestionRepository>,
    model: Arc<dyn ModelClient>,
    settings: PipelineSettings,
    default_model: String,
}

impl CritiqueService {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        model: Arc<dyn ModelClient>,
        settings: PipelineSettings,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            model,
            settings,
            default_model: default_model.into(),
        }
    }

    async fn load(&self, id: &str) -> AppResult<Question> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    /// Scores a stored question and persists the verdict, auto-rejecting it
    /// after too many failing attempts.
    pub async fn critique(&self, id: &str, model: Option<&str>) -> AppResult<CritiqueResult> {
        let mut question = self.load(id).await?;
        if question.is_rejected() {
            return Err(AppError::ValidationError(format!(
                "Question '{}' is already rejected",
                id
            )));
        }

        let model = model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.default_model.as_str());
        let request = CompletionRequest::new(model, CRITIQUE_SYSTEM_PROMPT, critique_prompt(&question))
            .with_temperature(CRITIQUE_TEMPERATURE)
            .with_json_response();
        let raw = self.model.complete(request).await?;

        let verdict = parse_verdict(&raw)?;
        let outcome = apply_critique(&mut question, verdict, &self.settings);
        log::info!(
            "Critiqued question {}: score {:?}, {:?}",
            question.id,
            question.critique_score,
            outcome
        );

        let question = self.repository.update(question).await?;
        Ok(CritiqueResult { question, outcome })
    }

    /// Applies the stored suggested rewrite and re-validates the question.
    pub async fn apply_suggested_rewrite(&self, id: &str) -> AppResult<Question> {
        let mut question = self.load(id).await?;
        apply_rewrite(&mut question)?;
        question.validation = Some(validate_question(&question, &self.settings));
        self.repository.update(question).await
    }
}
