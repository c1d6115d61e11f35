pub mod question_repository;

pub use question_repository::{MongoQuestionRepository, QuestionRepository};
