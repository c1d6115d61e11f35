use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::{GenerationConfig, QuestionType},
        dto::{
            request::{
                ConvertRequestDto, DedupeRequestDto, ParseRequestDto, PromptRequestDto,
                QuotaRequestDto, ValidateRequestDto,
            },
            response::{PromptResponseDto, QuotaResponseDto, ValidateResponseDto},
        },
    },
    services::{
        balancer::compute_quota, converter, coverage::coverage_gaps, deduplicator::dedupe,
        output_parser::parse_or_fail, prompt_builder, question_validator::validate_batch,
        quota::{evaluate_generation, quota_status},
    },
};

#[post("/api/pipeline/parse")]
pub async fn parse_output(
    state: web::Data<AppState>,
    request: web::Json<ParseRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let threshold = request
        .dedup_threshold
        .unwrap_or(state.config.pipeline.dedup_threshold);
    let outcome = parse_or_fail(&request.raw, threshold)?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[post("/api/pipeline/validate")]
pub async fn validate_questions(
    state: web::Data<AppState>,
    request: web::Json<ValidateRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let questions = validate_batch(request.into_inner().questions, &state.config.pipeline);
    Ok(HttpResponse::Ok().json(ValidateResponseDto::from_questions(questions)))
}

#[post("/api/pipeline/dedupe")]
pub async fn dedupe_questions(
    state: web::Data<AppState>,
    request: web::Json<DedupeRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();
    let threshold = request.threshold.unwrap_or(state.config.pipeline.dedup_threshold);
    let outcome = dedupe(request.questions, &[request.existing.as_slice()], threshold);
    Ok(HttpResponse::Ok().json(outcome))
}

#[post("/api/pipeline/convert")]
pub async fn convert_question(request: web::Json<ConvertRequestDto>) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    if request.question.question_type != QuestionType::MultipleChoice {
        return Err(AppError::ValidationError(
            "Only Multiple Choice questions can be converted".to_string(),
        ));
    }
    if request.question.correct_answer_text().is_none() {
        return Err(AppError::ValidationError(
            "Correct letter does not match any option".to_string(),
        ));
    }
    let difficulty = request.target_difficulty.unwrap_or(request.question.difficulty);
    Ok(HttpResponse::Ok().json(converter::convert(&request.question, difficulty)))
}

#[post("/api/pipeline/quotas")]
pub async fn check_quotas(
    state: web::Data<AppState>,
    request: web::Json<QuotaRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();
    let settings = &state.config.pipeline;
    let history = state.question_repository.find_all().await?;

    let config = GenerationConfig::new(
        request.discipline.clone(),
        request.difficulty,
        request.question_type,
        request.batch_size,
    );
    Ok(HttpResponse::Ok().json(QuotaResponseDto {
        quota: compute_quota(config.batch_size, config.difficulty, config.question_type),
        allowance: evaluate_generation(&config, &history, settings),
        status: quota_status(&config.discipline, &history, settings),
    }))
}

#[post("/api/pipeline/prompt")]
pub async fn build_prompt(
    state: web::Data<AppState>,
    request: web::Json<PromptRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();
    let settings = &state.config.pipeline;
    let history = state
        .question_repository
        .find_by_discipline(&request.config.discipline)
        .await?;

    let gaps = coverage_gaps(&request.config.discipline, &history, settings.max_coverage_gaps);
    let prompt = prompt_builder::build(&request.config, &request.file_context, &history, &gaps, settings);
    let quota = compute_quota(
        request.config.batch_size,
        request.config.difficulty,
        request.config.question_type,
    );

    Ok(HttpResponse::Ok().json(PromptResponseDto {
        prompt,
        quota,
        coverage_gaps: gaps,
    }))
}
