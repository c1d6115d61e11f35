use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CritiqueRequestDto, GenerateRequestDto, TranslateRequestDto},
};

#[post("/api/generations")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();
    let report = state
        .generation_service
        .generate(request.config, &request.file_context)
        .await?;
    Ok(HttpResponse::Created().json(report))
}

#[post("/api/questions/{id}/critique")]
pub async fn critique_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: Option<web::Json<CritiqueRequestDto>>,
) -> Result<HttpResponse, AppError> {
    let request = request.map(web::Json::into_inner).unwrap_or_default();
    request.validate()?;
    let result = state
        .critique_service
        .critique(&id, request.model.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/api/questions/{id}/rewrite")]
pub async fn apply_rewrite(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.critique_service.apply_suggested_rewrite(&id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/questions/{id}/translations")]
pub async fn translate_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<TranslateRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let translated = state
        .generation_service
        .translate_question(&id, &request.language, request.model.as_deref())
        .await?;
    Ok(HttpResponse::Created().json(translated))
}
