use serde::{Deserialize, Serialize};

use super::question::{Difficulty, Question, QuestionType};

/// Difficulty requested for a batch. `Balanced` exists only at generation
/// time and is never stored on a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum DifficultySelector {
    Easy,
    Medium,
    Hard,
    Balanced,
}

impl DifficultySelector {
    pub fn fixed(&self) -> Option<Difficulty> {
        match self {
            DifficultySelector::Easy => Some(Difficulty::Easy),
            DifficultySelector::Medium => Some(Difficulty::Medium),
            DifficultySelector::Hard => Some(Difficulty::Hard),
            DifficultySelector::Balanced => None,
        }
    }
}

impl From<Difficulty> for DifficultySelector {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => DifficultySelector::Easy,
            Difficulty::Medium => DifficultySelector::Medium,
            Difficulty::Hard => DifficultySelector::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum TypeSelector {
    #[serde(rename = "Multiple Choice", alias = "MC")]
    MultipleChoice,
    #[serde(rename = "True/False", alias = "T/F")]
    TrueFalse,
    Balanced,
}

impl TypeSelector {
    pub fn fixed(&self) -> Option<QuestionType> {
        match self {
            TypeSelector::MultipleChoice => Some(QuestionType::MultipleChoice),
            TypeSelector::TrueFalse => Some(QuestionType::TrueFalse),
            TypeSelector::Balanced => None,
        }
    }

    pub fn allows(&self, question_type: QuestionType) -> bool {
        self.fixed().map_or(true, |t| t == question_type)
    }
}

impl From<QuestionType> for TypeSelector {
    fn from(t: QuestionType) -> Self {
        match t {
            QuestionType::MultipleChoice => TypeSelector::MultipleChoice,
            QuestionType::TrueFalse => TypeSelector::TrueFalse,
        }
    }
}

/// Shape the generator is asked to answer in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    MarkdownTable,
    Json,
}

fn default_batch_size() -> usize {
    6
}

fn default_temperature() -> f32 {
    0.7
}

fn default_language() -> String {
    "English".to_string()
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub discipline: String,
    pub difficulty: DifficultySelector,
    #[serde(rename = "type")]
    pub question_type: TypeSelector,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub custom_rules: Option<String>,
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl GenerationConfig {
    pub fn new(
        discipline: impl Into<String>,
        difficulty: DifficultySelector,
        question_type: TypeSelector,
        batch_size: usize,
    ) -> Self {
        Self {
            discipline: discipline.into(),
            difficulty,
            question_type,
            batch_size,
            temperature: default_temperature(),
            model: None,
            language: default_language(),
            tags: Vec::new(),
            custom_rules: None,
            output_format: OutputFormat::default(),
        }
    }
}

/// Target count for one (difficulty, type) combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaCell {
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub count: usize,
}

/// Exact per-difficulty and per-type targets for one batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchQuota {
    pub batch_size: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub multiple_choice: usize,
    pub true_false: usize,
    pub cells: Vec<QuotaCell>,
}

impl BatchQuota {
    /// Rebuilds the difficulty and type totals from `cells`, dropping empty ones.
    pub fn from_cells(cells: Vec<QuotaCell>) -> Self {
        let cells: Vec<QuotaCell> = cells.into_iter().filter(|c| c.count > 0).collect();
        let sum_where = |keep: &dyn Fn(&QuotaCell) -> bool| -> usize {
            cells.iter().filter(|c| keep(c)).map(|c| c.count).sum()
        };
        Self {
            batch_size: sum_where(&|_| true),
            easy: sum_where(&|c| c.difficulty == Difficulty::Easy),
            medium: sum_where(&|c| c.difficulty == Difficulty::Medium),
            hard: sum_where(&|c| c.difficulty == Difficulty::Hard),
            multiple_choice: sum_where(&|c| c.question_type == QuestionType::MultipleChoice),
            true_false: sum_where(&|c| c.question_type == QuestionType::TrueFalse),
            cells,
        }
    }

    pub fn for_difficulty(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn for_type(&self, question_type: QuestionType) -> usize {
        match question_type {
            QuestionType::MultipleChoice => self.multiple_choice,
            QuestionType::TrueFalse => self.true_false,
        }
    }
}

/// Decision on whether a batch may be generated given stored history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationAllowance {
    pub allowed: bool,
    pub reason: String,
    pub max_allowed: usize,
    pub force_type: Option<QuestionType>,
    pub warning: bool,
}

/// Summary of one generation run, surfaced to the caller so auto-rejected
/// and flagged records are never silently swallowed.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub requested: usize,
    pub parsed: usize,
    pub duplicates_removed: usize,
    pub critical_dropped: usize,
    pub flagged: usize,
    pub converted_to_true_false: usize,
    pub over_quota: usize,
    pub accepted_into_review: Vec<Question>,
    pub dropped: Vec<Question>,
    pub notices: Vec<String>,
}
