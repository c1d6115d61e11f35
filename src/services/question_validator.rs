use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::PipelineSettings,
    models::domain::{validation::ValidationDetails, Question, ValidationResult},
    services::{answer_validator::check_answer, url_validator::check_url},
};

static NUMERIC_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("NUMERIC_ONLY is a valid regex pattern"));

/// Combines the URL, excerpt and answer checks into one decision.
///
/// Missing or fabricated evidence is a critical failure. A weak answer to
/// excerpt correlation only adds warnings and lowers confidence.
pub fn validate_question(question: &Question, settings: &PipelineSettings) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut critical = false;
    let mut confidence: u8 = 100;

    let url = check_url(&question.source_url);
    if !url.is_valid {
        let warning = url.warning.clone().unwrap_or_default();
        if url.is_missing {
            warnings.push(format!("Warning: {warning}"));
            confidence = confidence.min(50);
        } else {
            critical = true;
            warnings.push(format!("Critical: {warning}"));
            confidence = confidence.min(url.confidence);
        }
    } else if let Some(warning) = &url.warning {
        warnings.push(warning.clone());
        confidence = confidence.min(url.confidence);
    }

    let excerpt = question.source_excerpt.trim();
    if excerpt.is_empty() {
        critical = true;
        warnings.push("Critical: Missing source excerpt".to_string());
    } else if excerpt.chars().count() < settings.min_excerpt_len {
        critical = true;
        warnings.push(format!("Critical: Source excerpt too short (\"{excerpt}\")"));
    } else if NUMERIC_ONLY.is_match(excerpt) {
        critical = true;
        warnings.push(format!("Critical: Invalid source excerpt (\"{excerpt}\")"));
    }

    let answer = if critical {
        None
    } else {
        let check = check_answer(
            &question.correct,
            &question.options,
            &question.source_excerpt,
            settings,
        );
        if let Some(warning) = &check.warning {
            warnings.push(warning.clone());
            confidence = confidence.min(check.confidence);
        }
        Some(check)
    };

    if critical {
        confidence = 0;
    }

    ValidationResult {
        is_valid: !critical,
        is_critical_failure: critical,
        confidence,
        warnings,
        details: ValidationDetails {
            url: Some(url),
            answer,
        },
    }
}

/// Attaches `_validation` to every question, leaving other fields untouched.
pub fn validate_batch(questions: Vec<Question>, settings: &PipelineSettings) -> Vec<Question> {
    questions
        .into_iter()
        .map(|mut q| {
            q.validation = Some(validate_question(&q, settings));
            q
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::DOCS_BASE_URL,
        models::domain::{Difficulty, QuestionType},
    };

    fn question(url: &str, excerpt: &str) -> Question {
        Question::new(
            QuestionType::MultipleChoice,
            Difficulty::Medium,
            "Lighting & Rendering",
            "Which system provides dynamic global illumination?",
        )
        .with_options([("A", "Lumen"), ("B", "Nanite"), ("C", "Niagara"), ("D", "Chaos")])
        .with_correct("A")
        .with_source(url, excerpt)
    }

    fn lumen_url() -> String {
        format!("{DOCS_BASE_URL}lumen-global-illumination-and-reflections-in-unreal-engine")
    }

    #[test]
    fn test_numeric_excerpt_is_critical_regardless_of_url() {
        let result = validate_question(&question(&lumen_url(), "42"), &PipelineSettings::default());
        assert!(result.is_critical_failure);
        assert!(!result.is_valid);

        let padded = "1".repeat(30);
        let result = validate_question(&question(&lumen_url(), &padded), &PipelineSettings::default());
        assert!(result.is_critical_failure);
        assert!(result.warnings[0].starts_with("Critical: Invalid source excerpt"));
    }

    #[test]
    fn test_missing_url_is_soft_warning() {
        let excerpt = "Lumen is the default dynamic global illumination.";
        let result = validate_question(&question("", excerpt), &PipelineSettings::default());

        assert!(!result.is_critical_failure);
        assert!(result.is_valid);
        assert_eq!(result.confidence, 50);
        assert!(result
            .warnings
            .contains(&"Warning: Missing documentation URL".to_string()));
    }

    #[test]
    fn test_malformed_url_is_critical() {
        let excerpt = "Lumen is the default dynamic global illumination.";
        let result = validate_question(
            &question("https://forums.unrealengine.com/t/lumen", excerpt),
            &PipelineSettings::default(),
        );
        assert!(result.is_critical_failure);
        assert_eq!(
            result.warnings,
            vec!["Critical: Not an Epic Games documentation URL".to_string()]
        );
        assert!(result.details.answer.is_none());
    }

    #[test]
    fn test_short_and_missing_excerpts_are_critical() {
        let short = validate_question(&question(&lumen_url(), "Lumen is GI."), &PipelineSettings::default());
        assert!(short.is_critical_failure);

        let missing = validate_question(&question(&lumen_url(), ""), &PipelineSettings::default());
        assert!(missing.is_critical_failure);
        assert!(missing
            .warnings
            .contains(&"Critical: Missing source excerpt".to_string()));
    }

    #[test]
    fn test_weak_answer_match_only_warns() {
        let excerpt = "Virtual Shadow Maps deliver consistent high-resolution shadowing.";
        let result = validate_question(&question(&lumen_url(), excerpt), &PipelineSettings::default());

        assert!(!result.is_critical_failure);
        assert!(result.is_valid);
        assert_eq!(result.confidence, 0);
        assert!(result.is_flagged());
    }

    #[test]
    fn test_validate_batch_attaches_results() {
        let excerpt = "Lumen is the default dynamic global illumination.";
        let batch = vec![question(&lumen_url(), excerpt), question("", "7")];
        let validated = validate_batch(batch, &PipelineSettings::default());

        let first = validated[0].validation.as_ref().unwrap();
        assert!(first.is_valid);
        assert_eq!(first.confidence, 100);
        assert!(validated[1].is_critical_failure());
        assert_eq!(validated[0].question, "Which system provides dynamic global illumination?");
    }
}
