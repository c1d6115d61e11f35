use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::ValidationResult;

pub const TRUE_LABEL: &str = "TRUE";
pub const FALSE_LABEL: &str = "FALSE";
pub const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema)]
pub enum QuestionType {
    #[serde(rename = "Multiple Choice", alias = "MC")]
    MultipleChoice,
    #[serde(rename = "True/False", alias = "T/F")]
    TrueFalse,
}

impl QuestionType {
    /// Lenient label parsing used for model output: anything mentioning
    /// "true" is True/False, everything else is Multiple Choice.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("true") || lower.trim() == "t/f" {
            QuestionType::TrueFalse
        } else {
            QuestionType::MultipleChoice
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::TrueFalse => "True/False",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MC",
            QuestionType::TrueFalse => "T/F",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Case-insensitive parse; unknown labels fall back to Easy.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    TooEasy,
    TooHard,
    Incorrect,
    Unclear,
    Duplicate,
    PoorQuality,
    BadSource,
    Hallucination,
    LowScoreAfterRetries,
    QuotaExceeded,
    Other,
}

impl RejectionReason {
    /// Human-readable label shown to reviewers and fed back to the generator.
    pub fn label(&self) -> &'static str {
        match self {
            RejectionReason::TooEasy => "Too Easy",
            RejectionReason::TooHard => "Too Difficult",
            RejectionReason::Incorrect => "Incorrect Answer",
            RejectionReason::Unclear => "Unclear Question",
            RejectionReason::Duplicate => "Duplicate",
            RejectionReason::PoorQuality => "Poor Quality",
            RejectionReason::BadSource => "Bad/Missing Source",
            RejectionReason::Hallucination => "Hallucination - completely made up",
            RejectionReason::LowScoreAfterRetries => "Low critique score after repeated attempts",
            RejectionReason::QuotaExceeded => "Category quota already full",
            RejectionReason::Other => "Other",
        }
    }
}

/// Rewrite proposed by a critique pass.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize, JsonSchema)]
pub struct SuggestedRewrite {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub correct: String,
}

/// Canonical question record produced by the output parser.
///
/// `id` is minted per record and is not stable across translations;
/// `unique_id` links every language variant of the same question.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub unique_id: String,
    pub discipline: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub correct: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub source_excerpt: String,
    #[serde(default)]
    pub quality_score: Option<u8>,
    #[serde(default)]
    pub status: QuestionStatus,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "_validation", default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critique_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_rewrite: Option<SuggestedRewrite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite_changes: Option<String>,
    #[serde(default)]
    pub critique_attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<RejectionReason>,
    /// Question text of the Multiple Choice record this one was converted from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_mc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
}

fn default_language() -> String {
    "English".to_string()
}

pub fn new_question_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn true_false_options() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("A".to_string(), TRUE_LABEL.to_string()),
        ("B".to_string(), FALSE_LABEL.to_string()),
    ])
}

impl Question {
    pub fn new(
        question_type: QuestionType,
        difficulty: Difficulty,
        discipline: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        let id = new_question_id();
        let options = match question_type {
            QuestionType::TrueFalse => true_false_options(),
            QuestionType::MultipleChoice => BTreeMap::new(),
        };
        Self {
            unique_id: id.clone(),
            id,
            discipline: discipline.into(),
            question_type,
            difficulty,
            question: question.into(),
            options,
            correct: String::new(),
            source_url: String::new(),
            source_excerpt: String::new(),
            quality_score: None,
            status: QuestionStatus::Pending,
            language: default_language(),
            tags: Vec::new(),
            validation: None,
            critique: None,
            critique_score: None,
            suggested_rewrite: None,
            rewrite_changes: None,
            critique_attempts: 0,
            rejection_reason: None,
            original_mc: None,
            created_at: Some(Utc::now()),
            rejected_at: None,
        }
    }

    /// Sets Multiple Choice options from (letter, text) pairs, skipping blank texts.
    pub fn with_options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options = options
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        self
    }

    pub fn with_correct(mut self, letter: impl Into<String>) -> Self {
        self.correct = letter.into();
        self
    }

    pub fn with_source(mut self, url: impl Into<String>, excerpt: impl Into<String>) -> Self {
        self.source_url = url.into();
        self.source_excerpt = excerpt.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn correct_answer_text(&self) -> Option<&str> {
        self.options
            .get(&self.correct.to_uppercase())
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    pub fn is_rejected(&self) -> bool {
        self.status == QuestionStatus::Rejected
    }

    pub fn is_critical_failure(&self) -> bool {
        self.validation
            .as_ref()
            .is_some_and(|v| v.is_critical_failure)
    }

    pub fn reject(&mut self, reason: RejectionReason) {
        self.status = QuestionStatus::Rejected;
        self.rejection_reason = Some(reason);
        self.rejected_at = Some(Utc::now());
    }

    /// Accepting a record that failed validation critically needs `manual_override`.
    pub fn accept(&mut self, manual_override: bool) -> bool {
        if self.is_critical_failure() && !manual_override {
            return false;
        }
        self.status = QuestionStatus::Accepted;
        self.rejection_reason = None;
        self.rejected_at = None;
        true
    }

    /// Lists violations of the record's structural invariants.
    pub fn well_formedness_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        match self.question_type {
            QuestionType::TrueFalse => {
                if self.options != true_false_options() {
                    issues.push("True/False options must be exactly A=TRUE, B=FALSE".to_string());
                }
            }
            QuestionType::MultipleChoice => {
                if self.options.is_empty() || self.options.len() > OPTION_LETTERS.len() {
                    issues.push(format!(
                        "Multiple Choice needs 1 to 4 options, found {}",
                        self.options.len()
                    ));
                }
                if let Some(key) = self
                    .options
                    .keys()
                    .find(|k| !OPTION_LETTERS.contains(&k.as_str()))
                {
                    issues.push(format!("Unexpected option letter {key}"));
                }
            }
        }

        if !self.options.contains_key(&self.correct) {
            issues.push(format!(
                "Correct letter '{}' is not one of the options",
                self.correct
            ));
        }

        if self.question.trim().is_empty() {
            issues.push("Question text is empty".to_string());
        }

        issues
    }

    /// Adopts the identity of `original` for a freshly parsed translation.
    ///
    /// The result is pending review. The correct letter always follows the
    /// original; translated options are kept only when they carry the same
    /// letters, otherwise the original options are used.
    pub fn translated_from(original: &Question, mut translated: Question, language: &str) -> Self {
        translated.id = new_question_id();
        translated.unique_id = original.unique_id.clone();
        translated.discipline = original.discipline.clone();
        translated.question_type = original.question_type;
        translated.difficulty = original.difficulty;
        translated.language = language.to_string();
        translated.status = QuestionStatus::Pending;
        translated.rejection_reason = None;
        translated.rejected_at = None;
        translated.tags = original.tags.clone();
        translated.correct = original.correct.clone();
        match translated.question_type {
            QuestionType::TrueFalse => translated.options = true_false_options(),
            QuestionType::MultipleChoice => {
                let same_letters = translated.options.keys().eq(original.options.keys());
                if !same_letters {
                    translated.options = original.options.clone();
                }
            }
        }
        translated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::validation::ValidationResult;

    fn mc_question() -> Question {
        Question::new(
            QuestionType::MultipleChoice,
            Difficulty::Easy,
            "Technical Art",
            "Which system renders virtualized geometry?",
        )
        .with_options([("A", "Nanite"), ("B", "Lumen"), ("C", "Chaos"), ("D", "Niagara")])
        .with_correct("A")
    }

    #[test]
    fn test_question_type_serializes_with_display_labels() {
        let json = serde_json::to_string(&QuestionType::TrueFalse).unwrap();
        assert_eq!(json, "\"True/False\"");
        let parsed: QuestionType = serde_json::from_str("\"Multiple Choice\"").unwrap();
        assert_eq!(parsed, QuestionType::MultipleChoice);
        let short: QuestionType = serde_json::from_str("\"T/F\"").unwrap();
        assert_eq!(short, QuestionType::TrueFalse);
    }

    #[test]
    fn test_question_type_from_label_is_lenient() {
        assert_eq!(QuestionType::from_label("TRUE/FALSE"), QuestionType::TrueFalse);
        assert_eq!(QuestionType::from_label("true or false"), QuestionType::TrueFalse);
        assert_eq!(QuestionType::from_label("Multiple Choice"), QuestionType::MultipleChoice);
        assert_eq!(QuestionType::from_label(""), QuestionType::MultipleChoice);
    }

    #[test]
    fn test_difficulty_from_label_defaults_to_easy() {
        assert_eq!(Difficulty::from_label(" hard "), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("impossible"), Difficulty::Easy);
    }

    #[test]
    fn test_question_serializes_wire_names() {
        let mut q = mc_question();
        q.validation = Some(ValidationResult::default());
        let value = serde_json::to_value(&q).unwrap();

        assert_eq!(value["type"], "Multiple Choice");
        assert_eq!(value["status"], "pending");
        assert!(value.get("uniqueId").is_some());
        assert!(value.get("_validation").is_some());
        assert!(value.get("critique").is_none());
    }

    #[test]
    fn test_well_formed_multiple_choice_has_no_issues() {
        assert!(mc_question().well_formedness_issues().is_empty());
    }

    #[test]
    fn test_correct_letter_outside_options_is_reported() {
        let q = mc_question().with_correct("E");
        let issues = q.well_formedness_issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("'E'"));
    }

    #[test]
    fn test_true_false_always_has_two_fixed_options() {
        let q = Question::new(QuestionType::TrueFalse, Difficulty::Hard, "Networking", "RPCs are reliable by default.")
            .with_correct("B");
        assert_eq!(q.options, true_false_options());
        assert!(q.well_formedness_issues().is_empty());
        assert_eq!(q.correct_answer_text(), Some(FALSE_LABEL));
    }

    #[test]
    fn test_accept_refuses_critical_failure_without_override() {
        let mut q = mc_question();
        q.validation = Some(ValidationResult {
            is_valid: false,
            is_critical_failure: true,
            ..ValidationResult::default()
        });

        assert!(!q.accept(false));
        assert_eq!(q.status, QuestionStatus::Pending);
        assert!(q.accept(true));
        assert_eq!(q.status, QuestionStatus::Accepted);
    }

    #[test]
    fn test_reject_records_reason_and_timestamp() {
        let mut q = mc_question();
        q.reject(RejectionReason::Hallucination);
        assert!(q.is_rejected());
        assert_eq!(q.rejection_reason, Some(RejectionReason::Hallucination));
        assert!(q.rejected_at.is_some());
        assert_eq!(
            RejectionReason::Hallucination.label(),
            "Hallucination - completely made up"
        );
    }

    #[test]
    fn test_translated_from_keeps_unique_id_and_mints_new_id() {
        let original = mc_question();
        let translated = Question::new(
            QuestionType::MultipleChoice,
            Difficulty::Hard,
            "Other",
            "¿Qué sistema renderiza geometría virtualizada?",
        )
        .with_options(original.options.clone())
        .with_correct("C");

        let result = Question::translated_from(&original, translated, "Spanish");

        assert_eq!(result.unique_id, original.unique_id);
        assert_ne!(result.id, original.id);
        assert_eq!(result.question_type, QuestionType::MultipleChoice);
        assert_eq!(result.difficulty, Difficulty::Easy);
        assert_eq!(result.discipline, "Technical Art");
        assert_eq!(result.language, "Spanish");
        assert_eq!(result.status, QuestionStatus::Pending);
        assert_eq!(result.correct, original.correct);
        assert!(result.well_formedness_issues().is_empty());
    }

    #[test]
    fn test_translated_from_repairs_mismatched_option_shape() {
        let original = mc_question();
        let translated = Question::new(
            QuestionType::TrueFalse,
            Difficulty::Easy,
            "Technical Art",
            "¿Qué sistema renderiza geometría virtualizada?",
        )
        .with_correct("A");

        let result = Question::translated_from(&original, translated, "Spanish");

        assert_eq!(result.question_type, QuestionType::MultipleChoice);
        assert_eq!(result.options, original.options);
        assert!(result.well_formedness_issues().is_empty());
    }
}
