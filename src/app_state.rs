use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuestionRepository, QuestionRepository},
    services::{
        critique_service::CritiqueService,
        generation_service::GenerationService,
        model_service::{ModelClient, OpenAiModelClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub critique_service: Arc<CritiqueService>,
    pub question_repository: Arc<dyn QuestionRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db, &config.questions_collection));
        question_repository.ensure_indexes().await?;

        let model = Arc::new(OpenAiModelClient::new(&config.openai_api_key, &config.openai_base_url));

        Ok(Self::with_components(config, question_repository, model))
    }

    /// Wires services over the given storage and model backends.
    pub fn with_components(
        config: Config,
        question_repository: Arc<dyn QuestionRepository>,
        model: Arc<dyn ModelClient>,
    ) -> Self {
        let generation_service = Arc::new(GenerationService::new(
            question_repository.clone(),
            model.clone(),
            config.pipeline.clone(),
            config.default_model.clone(),
        ));
        let critique_service = Arc::new(CritiqueService::new(
            question_repository.clone(),
            model,
            config.pipeline.clone(),
            config.default_model.clone(),
        ));

        Self {
            generation_service,
            critique_service,
            question_repository,
            config: Arc::new(config),
        }
    }
}
