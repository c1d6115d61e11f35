use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Question,
};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    async fn find_by_discipline(&self, discipline: &str) -> AppResult<Vec<Question>>;
    /// Every stored question, all disciplines and languages.
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<Vec<Question>>;
    async fn update(&self, question: Question) -> AppResult<Question>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let unique_id_index = IndexModel::builder()
            .keys(doc! { "uniqueId": 1, "language": 1 })
            .options(IndexOptions::builder().name("unique_id_language".to_string()).build())
            .build();

        let discipline_index = IndexModel::builder()
            .keys(doc! { "discipline": 1, "difficulty": 1, "type": 1 })
            .options(IndexOptions::builder().name("discipline_category".to_string()).build())
            .build();

        self.collection
            .create_indexes(vec![id_index, unique_id_index, discipline_index])
            .await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_by_discipline(&self, discipline: &str) -> AppResult<Vec<Question>> {
        let cursor = self.collection.find(doc! { "discipline": discipline }).await?;
        let items: Vec<Question> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Question> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<Vec<Question>> {
        if questions.is_empty() {
            return Ok(questions);
        }
        self.collection.insert_many(&questions).await?;
        Ok(questions)
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let result = self
            .collection
            .replace_one(doc! { "id": &question.id }, &question)
            .await?;
        ensure_matched(result.matched_count, &question.id)?;
        Ok(question)
    }
}

fn ensure_matched(matched_count: u64, id: &str) -> AppResult<()> {
    if matched_count == 0 {
        return Err(AppError::NotFound(format!("Question with id '{}' not found", id)));
    }
    Ok(())
}
