use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    config::PipelineSettings,
    errors::{AppError, AppResult},
    models::domain::{question::SuggestedRewrite, Question, QuestionType, RejectionReason},
};

/// One scored critique of a question.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct CritiqueVerdict {
    pub score: u8,
    #[serde(default)]
    pub critique: String,
    #[serde(default)]
    pub rewrite: Option<SuggestedRewrite>,
    #[serde(default)]
    pub changes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CritiqueOutcome {
    Passed,
    /// Below the passing score with attempts left.
    NeedsWork { attempts_left: u32 },
    AutoRejected,
}

/// Records `verdict` on `question` and bumps the attempt counter.
///
/// A score below the passing score on or after the last allowed attempt
/// rejects the question with [`RejectionReason::LowScoreAfterRetries`].
pub fn apply_critique(
    question: &mut Question,
    verdict: CritiqueVerdict,
    settings: &PipelineSettings,
) -> CritiqueOutcome {
    question.critique_attempts += 1;
    question.critique = Some(verdict.critique);
    question.critique_score = Some(verdict.score.min(100));
    question.suggested_rewrite = verdict.rewrite;
    question.rewrite_changes = verdict.changes;

    if verdict.score >= settings.critique_passing_score {
        return CritiqueOutcome::Passed;
    }

    if question.critique_attempts >= settings.max_critique_attempts {
        log::warn!(
            "Auto-rejected question {}: score {}/100 after {} attempts",
            question.id,
            verdict.score,
            question.critique_attempts
        );
        question.reject(RejectionReason::LowScoreAfterRetries);
        return CritiqueOutcome::AutoRejected;
    }

    CritiqueOutcome::NeedsWork {
        attempts_left: settings.max_critique_attempts - question.critique_attempts,
    }
}

/// Replaces the question body with its suggested rewrite and clears the
/// critique fields.
///
/// A True/False question keeps its fixed options whatever the rewrite says.
/// A rewrite whose correct letter would not name one of the resulting
/// options is refused and left in place.
pub fn apply_rewrite(question: &mut Question) -> AppResult<()> {
    let Some(rewrite) = question.suggested_rewrite.as_ref() else {
        return Err(AppError::ValidationError(format!(
            "Question '{}' has no suggested rewrite",
            question.id
        )));
    };

    let options = match question.question_type {
        QuestionType::MultipleChoice => {
            let rewritten: BTreeMap<String, String> = rewrite
                .options
                .iter()
                .filter(|(_, text)| !text.trim().is_empty())
                .map(|(letter, text)| (letter.trim().to_uppercase(), text.clone()))
                .collect();
            if rewritten.is_empty() {
                question.options.clone()
            } else {
                rewritten
            }
        }
        QuestionType::TrueFalse => question.options.clone(),
    };

    let suggested = rewrite.correct.trim().to_uppercase();
    let correct = if suggested.is_empty() {
        question.correct.clone()
    } else {
        suggested
    };
    if !options.contains_key(&correct) {
        return Err(AppError::ValidationError(format!(
            "Suggested rewrite for '{}' marks {} correct but has no such option",
            question.id, correct
        )));
    }

    if let Some(rewrite) = question.suggested_rewrite.take() {
        if !rewrite.question.trim().is_empty() {
            question.question = rewrite.question;
        }
    }
    question.options = options;
    question.correct = correct;
    question.rewrite_changes = None;
    question.critique = None;
    question.critique_score = None;
    question.validation = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Difficulty, QuestionStatus};

    fn question() -> Question {
        Question::new(QuestionType::MultipleChoice, Difficulty::Medium, "Animation", "Which node blends two poses?")
            .with_options([("A", "Blend"), ("B", "Layered blend per bone"), ("C", "Slot"), ("D", "Cache")])
            .with_correct("A")
    }

    fn verdict(score: u8) -> CritiqueVerdict {
        CritiqueVerdict {
            score,
            critique: "Distractors are weak.".to_string(),
            rewrite: None,
            changes: None,
        }
    }

    #[test]
    fn test_third_low_score_auto_rejects() {
        let settings = PipelineSettings::default();
        let mut q = question();

        assert_eq!(apply_critique(&mut q, verdict(40), &settings), CritiqueOutcome::NeedsWork { attempts_left: 2 });
        assert_eq!(apply_critique(&mut q, verdict(55), &settings), CritiqueOutcome::NeedsWork { attempts_left: 1 });
        assert_eq!(q.status, QuestionStatus::Pending);

        assert_eq!(apply_critique(&mut q, verdict(69), &settings), CritiqueOutcome::AutoRejected);
        assert_eq!(q.status, QuestionStatus::Rejected);
        assert_eq!(q.rejection_reason, Some(RejectionReason::LowScoreAfterRetries));
        assert!(q.rejected_at.is_some());
        assert_eq!(q.critique_attempts, 3);
    }

    #[test]
    fn test_passing_score_never_rejects() {
        let settings = PipelineSettings::default();
        let mut q = question();
        q.critique_attempts = 5;
        assert_eq!(apply_critique(&mut q, verdict(70), &settings), CritiqueOutcome::Passed);
        assert_eq!(q.status, QuestionStatus::Pending);
        assert_eq!(q.critique_score, Some(70));
    }

    #[test]
    fn test_apply_rewrite_replaces_body_and_clears_critique() {
        let settings = PipelineSettings::default();
        let mut q = question();
        let mut v = verdict(50);
        v.rewrite = Some(SuggestedRewrite {
            question: "A character needs upper-body aiming over a run cycle. Which node fits?".to_string(),
            options: BTreeMap::from([
                ("A".to_string(), "Blend".to_string()),
                ("B".to_string(), "Layered blend per bone".to_string()),
                ("C".to_string(), "Slot".to_string()),
                ("D".to_string(), String::new()),
            ]),
            correct: "b".to_string(),
        });
        apply_critique(&mut q, v, &settings);

        assert!(apply_rewrite(&mut q).is_ok());
        assert!(q.question.starts_with("A character needs"));
        assert_eq!(q.correct, "B");
        assert_eq!(q.options.len(), 3);
        assert!(q.critique.is_none() && q.critique_score.is_none() && q.suggested_rewrite.is_none());
        assert_eq!(q.critique_attempts, 1);
        assert!(matches!(apply_rewrite(&mut q), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_true_false_rewrite_keeps_fixed_options() {
        let mut q = Question::new(QuestionType::TrueFalse, Difficulty::Easy, "Animation", "Montages can loop.")
            .with_correct("A");
        q.suggested_rewrite = Some(SuggestedRewrite {
            question: "<b>Anim Montages</b> can loop sections.".to_string(),
            options: BTreeMap::from([("A".to_string(), "Yes".to_string())]),
            correct: "B".to_string(),
        });

        assert!(apply_rewrite(&mut q).is_ok());
        assert!(q.well_formedness_issues().is_empty());
        assert_eq!(q.correct, "B");
    }

    #[test]
    fn test_rewrite_dropping_the_correct_option_is_refused() {
        let mut q = question().with_correct("D");
        let rewrite = SuggestedRewrite {
            question: "Which node layers an aim pose over locomotion?".to_string(),
            options: BTreeMap::from([
                ("A".to_string(), "Blend".to_string()),
                ("B".to_string(), "Layered blend per bone".to_string()),
                ("C".to_string(), "Slot".to_string()),
            ]),
            correct: String::new(),
        };
        q.suggested_rewrite = Some(rewrite.clone());
        let before = q.clone();

        assert!(matches!(apply_rewrite(&mut q), Err(AppError::ValidationError(_))));
        assert_eq!(q, before);
        assert_eq!(q.suggested_rewrite, Some(rewrite));
        assert!(q.well_formedness_issues().is_empty());
    }

    #[test]
    fn test_rewrite_with_blank_correct_keeps_letter_when_still_present() {
        let mut q = question().with_correct("B");
        q.suggested_rewrite = Some(SuggestedRewrite {
            question: String::new(),
            options: BTreeMap::from([
                ("A".to_string(), "Two Bone IK".to_string()),
                ("B".to_string(), "Layered blend per bone".to_string()),
            ]),
            correct: " ".to_string(),
        });

        assert!(apply_rewrite(&mut q).is_ok());
        assert_eq!(q.correct, "B");
        assert_eq!(q.question, "Which node blends two poses?");
        assert_eq!(q.options.len(), 2);
        assert!(q.well_formedness_issues().is_empty());
    }
}
