use once_cell::sync::Lazy;
use rand::{seq::SliceRandom, Rng};
use regex::Regex;

use crate::models::domain::{
    question::{new_question_id, true_false_options},
    Difficulty, Question, QuestionStatus, QuestionType,
};

static CAN_YOU: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^can you\s+").expect("CAN_YOU is a valid regex pattern"));
static IS_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^is\s+").expect("IS_PREFIX is a valid regex pattern"));
static WH_WITH_AUX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(what|which|how|where|when|why)\s+(is|are|does|do|can|should|would)\s+")
        .expect("WH_WITH_AUX is a valid regex pattern")
});
static YES_NO_QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(is|are|was|were|does|do|did|can|could|should|would|will|has|have)\s+(.+)$")
        .expect("YES_NO_QUESTION is a valid regex pattern")
});
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE is a valid regex pattern"));

const DETERMINERS: &[&str] = &["the", "a", "an", "this", "that", "these", "those", "your", "my"];

/// Turns question stems into declarative statements.
pub trait StatementRewriter: Send + Sync {
    /// Statement claiming `answer` answers `stem`.
    fn assert_answer(&self, stem: &str, answer: &str) -> String;

    /// Statement form of a yes/no question, with the same polarity.
    fn declarative(&self, stem: &str) -> String;
}

/// Ordered regex rules; approximate on unusual phrasing.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicRewriter;

impl StatementRewriter for HeuristicRewriter {
    fn assert_answer(&self, stem: &str, answer: &str) -> String {
        if CAN_YOU.is_match(stem) {
            return format!("You can {} {}", CAN_YOU.replace(stem, ""), answer);
        }
        if IS_PREFIX.is_match(stem) {
            return format!("{} is {}", IS_PREFIX.replace(stem, ""), answer);
        }
        if WH_WITH_AUX.is_match(stem) {
            return format!("{} is {}", WH_WITH_AUX.replace(stem, ""), answer);
        }
        format!("{stem} is {answer}")
    }

    fn declarative(&self, stem: &str) -> String {
        if CAN_YOU.is_match(stem) {
            return format!("You can {}", CAN_YOU.replace(stem, ""));
        }

        let Some(caps) = YES_NO_QUESTION.captures(stem) else {
            return stem.to_string();
        };
        let aux = caps[1].to_lowercase();
        let words: Vec<&str> = caps[2].split_whitespace().collect();

        let subject_len = match words.first() {
            Some(first) if DETERMINERS.contains(&first.to_lowercase().as_str()) => 2,
            _ => 1,
        }
        .min(words.len());

        let (subject, rest) = words.split_at(subject_len);
        if rest.is_empty() {
            return stem.to_string();
        }
        format!("{} {} {}", subject.join(" "), aux, rest.join(" "))
    }
}

fn finish_statement(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ").trim().to_string();
    let mut chars = collapsed.chars();
    let mut statement = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    if !statement.ends_with('.') {
        statement.push('.');
    }
    statement
}

/// Polarity of an answer that is itself a yes/no token.
fn boolean_polarity(answer: &str) -> Option<bool> {
    let lower = answer.trim().to_lowercase();
    match lower.trim_end_matches(|c| matches!(c, '.' | ',' | '!')) {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

/// Rewrites a Multiple Choice question as a True/False statement.
///
/// A yes/no style correct answer keeps its polarity. Otherwise the
/// statement asserts the correct answer or a random wrong one, 50/50.
pub fn convert_mc_to_tf<R: Rng + ?Sized>(
    mc: &Question,
    difficulty: Difficulty,
    rewriter: &dyn StatementRewriter,
    rng: &mut R,
) -> Question {
    let correct_text = mc.correct_answer_text().unwrap_or_default().to_string();
    let stem = mc.question.trim().trim_end_matches('?').trim();

    let (statement, is_true) = match boolean_polarity(&correct_text) {
        Some(polarity) => (rewriter.declarative(stem), polarity),
        None => {
            let make_true = rng.gen_bool(0.5);
            let target = if make_true {
                correct_text.clone()
            } else {
                let wrong: Vec<&String> = mc
                    .options
                    .iter()
                    .filter(|(k, v)| **k != mc.correct && !v.trim().is_empty())
                    .map(|(_, v)| v)
                    .collect();
                wrong
                    .choose(rng)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "incorrect".to_string())
            };
            (rewriter.assert_answer(stem, &target), make_true)
        }
    };

    let id = new_question_id();
    Question {
        id: id.clone(),
        unique_id: id,
        question_type: QuestionType::TrueFalse,
        difficulty,
        question: finish_statement(&statement),
        options: true_false_options(),
        correct: if is_true { "A" } else { "B" }.to_string(),
        status: QuestionStatus::Pending,
        validation: None,
        critique: None,
        critique_score: None,
        suggested_rewrite: None,
        rewrite_changes: None,
        critique_attempts: 0,
        rejection_reason: None,
        rejected_at: None,
        original_mc: Some(mc.question.clone()),
        ..mc.clone()
    }
}

/// [`convert_mc_to_tf`] with the default rewriter and thread-local randomness.
pub fn convert(mc: &Question, difficulty: Difficulty) -> Question {
    convert_mc_to_tf(mc, difficulty, &HeuristicRewriter, &mut rand::thread_rng())
}
