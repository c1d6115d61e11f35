pub mod generation;
pub mod question;
pub mod validation;
pub use generation::{
    BatchQuota, DifficultySelector, GenerationAllowance, GenerationConfig, GenerationReport,
    OutputFormat, QuotaCell, TypeSelector,
};
pub use question::{Difficulty, Question, QuestionStatus, QuestionType, RejectionReason};
pub use validation::{AnswerCheck, UrlCheck, ValidationResult};
