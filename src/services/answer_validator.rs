use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{config::PipelineSettings, constants::STOP_WORDS, models::domain::AnswerCheck};

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("HTML_TAG is a valid regex pattern"));
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("NON_WORD is a valid regex pattern"));

/// Distinct lowercase words longer than two characters that are not stop words.
pub fn key_terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let stripped = HTML_TAG.replace_all(&lower, "");
    let cleaned = NON_WORD.replace_all(&stripped, " ");

    let mut terms: Vec<String> = Vec::new();
    for word in cleaned.split_whitespace() {
        if word.len() > 2 && !STOP_WORDS.contains(&word) && !terms.iter().any(|t| t == word) {
            terms.push(word.to_string());
        }
    }
    terms
}

/// Scores how well the text behind `correct` is supported by `excerpt`.
pub fn check_answer(
    correct: &str,
    options: &BTreeMap<String, String>,
    excerpt: &str,
    settings: &PipelineSettings,
) -> AnswerCheck {
    if correct.trim().is_empty() || excerpt.trim().is_empty() {
        return AnswerCheck {
            is_valid: false,
            confidence: 0,
            warning: Some("Missing CorrectLetter or SourceExcerpt".to_string()),
            ..AnswerCheck::default()
        };
    }

    let letter = correct.trim().to_uppercase();
    let Some(answer) = options.get(&letter).filter(|a| !a.trim().is_empty()) else {
        return AnswerCheck {
            is_valid: false,
            confidence: 0,
            warning: Some(format!("No option found for letter {}", correct.trim())),
            ..AnswerCheck::default()
        };
    };

    let terms = key_terms(answer);
    let excerpt_lower = excerpt.to_lowercase();
    let matched: Vec<String> = terms
        .iter()
        .filter(|t| excerpt_lower.contains(t.as_str()))
        .cloned()
        .collect();

    let confidence = if terms.is_empty() {
        0
    } else {
        (matched.len() as f64 / terms.len() as f64 * 100.0).round() as u8
    };

    let (is_valid, warning) = if confidence < settings.answer_missing_below {
        (false, Some(format!("Answer \"{answer}\" not found in source excerpt")))
    } else if confidence < settings.answer_low_below {
        (
            false,
            Some(format!(
                "Low confidence: only {}/{} key terms matched",
                matched.len(),
                terms.len()
            )),
        )
    } else if confidence < settings.answer_moderate_below {
        (
            true,
            Some("Moderate confidence: verify answer matches source".to_string()),
        )
    } else {
        (true, None)
    };

    AnswerCheck {
        is_valid,
        confidence,
        warning,
        correct_answer: Some(answer.clone()),
        answer_terms: terms,
        matched_terms: matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(a: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("A".to_string(), a.to_string()),
            ("B".to_string(), "Lumen".to_string()),
        ])
    }

    #[test]
    fn test_key_terms_drop_stop_words_tags_and_repeats() {
        let terms = key_terms("The <b>Nanite</b> system uses Nanite-enabled meshes, which are virtualized.");
        assert_eq!(terms, vec!["nanite", "system", "enabled", "meshes", "virtualized"]);
    }

    #[test]
    fn test_missing_inputs_are_invalid() {
        let settings = PipelineSettings::default();
        let check = check_answer("", &options("Nanite"), "Nanite is great", &settings);
        assert!(!check.is_valid);
        assert_eq!(check.confidence, 0);

        let check = check_answer("C", &options("Nanite"), "Nanite is great", &settings);
        assert_eq!(check.warning.as_deref(), Some("No option found for letter C"));
    }

    #[test]
    fn test_full_match_is_valid_without_warning() {
        let check = check_answer(
            "a",
            &options("Virtualized geometry"),
            "Nanite is a virtualized geometry system.",
            &PipelineSettings::default(),
        );
        assert!(check.is_valid);
        assert_eq!(check.confidence, 100);
        assert!(check.warning.is_none());
    }

    #[test]
    fn test_confidence_tiers() {
        let settings = PipelineSettings::default();
        let excerpt = "Lumen computes diffuse global illumination.";

        // 2 of 3 terms -> 67, moderate
        let moderate = check_answer("A", &options("diffuse global shadows"), excerpt, &settings);
        assert_eq!(moderate.confidence, 67);
        assert!(moderate.is_valid);
        assert!(moderate.warning.unwrap().starts_with("Moderate confidence"));

        // 1 of 3 terms -> 33, low
        let low = check_answer("A", &options("diffuse cascaded shadows"), excerpt, &settings);
        assert_eq!(low.confidence, 33);
        assert!(!low.is_valid);
        assert_eq!(low.warning.as_deref(), Some("Low confidence: only 1/3 key terms matched"));

        // 0 terms -> not found
        let absent = check_answer("A", &options("Cascaded shadow maps"), excerpt, &settings);
        assert_eq!(absent.confidence, 0);
        assert!(absent.warning.unwrap().contains("not found in source excerpt"));
    }
}
