#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use question_forge::{
    config::{Config, PipelineSettings},
    errors::{AppError, AppResult},
    models::domain::Question,
    repositories::QuestionRepository,
    services::model_service::{CompletionRequest, ModelClient},
};

pub const LUMEN_URL: &str =
    "https://dev.epicgames.com/documentation/en-us/unreal-engine/lumen-global-illumination-and-reflections-in-unreal-engine";

pub const TABLE_HEADER: &str = "| ID | Discipline | Type | Difficulty | Question | Answer | OptionA | OptionB | OptionC | OptionD | CorrectLetter | SourceURL | SourceExcerpt | QualityScore |\n|---|---|---|---|---|---|---|---|---|---|---|---|---|---|";

pub fn mc_row(id: usize, difficulty: &str, question: &str, excerpt: &str) -> String {
    format!(
        "| {id} | Lighting & Rendering | Multiple Choice | {difficulty} | {question} | Lumen | Lumen | Nanite | Chaos | Niagara | A | {LUMEN_URL} | {excerpt} | 90 |"
    )
}

pub fn tf_row(id: usize, difficulty: &str, question: &str, excerpt: &str) -> String {
    format!(
        "| {id} | Lighting & Rendering | True/False | {difficulty} | {question} | TRUE | TRUE | FALSE |  |  | A | {LUMEN_URL} | {excerpt} | 85 |"
    )
}

pub fn table(rows: &[String]) -> String {
    format!("{}\n{}", TABLE_HEADER, rows.join("\n"))
}

pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<String, Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }

    async fn find_by_discipline(&self, discipline: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .values()
            .filter(|q| q.discipline == discipline)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.values().cloned().collect())
    }

    async fn insert_many(&self, items: Vec<Question>) -> AppResult<Vec<Question>> {
        let mut questions = self.questions.write().await;
        if let Some(existing) = items.iter().find(|q| questions.contains_key(&q.id)) {
            return Err(AppError::DatabaseError(format!("duplicate id {}", existing.id)));
        }
        for q in &items {
            questions.insert(q.id.clone(), q.clone());
        }
        Ok(items)
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if !questions.contains_key(&question.id) {
            return Err(AppError::NotFound(format!("Question '{}' not found", question.id)));
        }
        questions.insert(question.id.clone(), question.clone());
        Ok(question)
    }
}

/// Replies with queued responses in order and records every request.
pub struct ScriptedModelClient {
    replies: Mutex<VecDeque<AppResult<String>>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedModelClient {
    pub fn new(replies: Vec<AppResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::new(vec![Ok(reply.into())])
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.requests.lock().unwrap().last().map(|r| r.prompt.clone())
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::UpstreamError("no scripted reply left".to_string())))
    }
}

pub fn test_config() -> Config {
    Config {
        app_env: "test".to_string(),
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "question-forge-test".to_string(),
        questions_collection: "questions".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        openai_api_key: SecretString::from("test-key".to_string()),
        openai_base_url: "http://localhost:9999/v1".to_string(),
        default_model: "test-model".to_string(),
        pipeline: PipelineSettings::default(),
    }
}
