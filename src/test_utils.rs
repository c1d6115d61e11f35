use crate::models::domain::{Difficulty, Question, QuestionType};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::constants::DOCS_BASE_URL;

    pub const NANITE_EXCERPT: &str =
        "Nanite is Unreal Engine's virtualized geometry system enabling massive detail.";

    pub fn nanite_url() -> String {
        format!("{DOCS_BASE_URL}nanite-virtualized-geometry-in-unreal-engine")
    }

    /// A well-sourced Multiple Choice question.
    pub fn sourced_mc(discipline: &str, difficulty: Difficulty, text: &str) -> Question {
        Question::new(QuestionType::MultipleChoice, difficulty, discipline, text)
            .with_options([("A", "Nanite"), ("B", "Lumen"), ("C", "Chaos"), ("D", "Niagara")])
            .with_correct("A")
            .with_source(nanite_url(), NANITE_EXCERPT)
    }

    /// A well-sourced True/False question answered TRUE.
    pub fn sourced_tf(discipline: &str, difficulty: Difficulty, text: &str) -> Question {
        Question::new(QuestionType::TrueFalse, difficulty, discipline, text)
            .with_correct("A")
            .with_source(nanite_url(), NANITE_EXCERPT)
    }

    /// `n` distinct stored questions in one category.
    pub fn stored_batch(
        n: usize,
        discipline: &str,
        difficulty: Difficulty,
        question_type: QuestionType,
    ) -> Vec<Question> {
        (0..n)
            .map(|i| {
                let text = format!("Stored {question_type} question number {i} about topic {}", i * 7919);
                match question_type {
                    QuestionType::MultipleChoice => sourced_mc(discipline, difficulty, &text),
                    QuestionType::TrueFalse => sourced_tf(discipline, difficulty, &text),
                }
            })
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::{config::PipelineSettings, services::question_validator::validate_question};

    #[test]
    fn test_fixtures_pass_validation() {
        let settings = PipelineSettings::default();
        let mc = sourced_mc("Rendering", Difficulty::Easy, "Which system virtualizes geometry?");
        let tf = sourced_tf("Rendering", Difficulty::Hard, "Nanite virtualizes geometry.");

        assert!(!validate_question(&mc, &settings).is_critical_failure);
        assert!(!validate_question(&tf, &settings).is_critical_failure);
        assert!(mc.well_formedness_issues().is_empty());
        assert!(tf.well_formedness_issues().is_empty());
    }

    #[test]
    fn test_stored_batch_has_distinct_identities() {
        let batch = stored_batch(3, "Rendering", Difficulty::Medium, QuestionType::TrueFalse);
        assert_eq!(batch.len(), 3);
        assert_ne!(batch[0].unique_id, batch[1].unique_id);
        assert!(batch.iter().all(|q| q.question_type == QuestionType::TrueFalse));
    }
}
