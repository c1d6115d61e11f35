use serde::Serialize;

use crate::{models::domain::Question, services::similarity::similarity};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DuplicateReason {
    /// Same `id` or `unique_id` as an existing record.
    SameIdentity,
    SimilarText { similarity: f64 },
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedDuplicate {
    pub question: Question,
    pub matched_id: String,
    pub reason: DuplicateReason,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct DedupOutcome {
    pub kept: Vec<Question>,
    pub dropped: Vec<DroppedDuplicate>,
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

fn find_match<'a>(
    candidate: &Question,
    pool: impl IntoIterator<Item = &'a Question>,
    threshold: f64,
) -> Option<(String, DuplicateReason)> {
    for existing in pool {
        if existing.id == candidate.id || existing.unique_id == candidate.unique_id {
            return Some((existing.id.clone(), DuplicateReason::SameIdentity));
        }
        let score = similarity(&candidate.question, &existing.question);
        if score >= threshold {
            return Some((
                existing.id.clone(),
                DuplicateReason::SimilarText { similarity: score },
            ));
        }
    }
    None
}

/// Drops items that duplicate an earlier item in the batch or anything in
/// `existing`. First occurrence wins.
pub fn dedupe(new_items: Vec<Question>, existing: &[&[Question]], threshold: f64) -> DedupOutcome {
    let mut outcome = DedupOutcome::default();

    for candidate in new_items {
        let prior = existing.iter().flat_map(|list| list.iter());
        let found = find_match(&candidate, prior, threshold)
            .or_else(|| find_match(&candidate, outcome.kept.iter(), threshold));

        match found {
            Some((matched_id, reason)) => {
                log::info!(
                    "Removed duplicate question \"{}\" (matches {}, {:?})",
                    preview(&candidate.question),
                    matched_id,
                    reason
                );
                outcome.dropped.push(DroppedDuplicate {
                    question: candidate,
                    matched_id,
                    reason,
                });
            }
            None => outcome.kept.push(candidate),
        }
    }

    if !outcome.dropped.is_empty() {
        log::info!(
            "Deduplication kept {} and removed {} question(s)",
            outcome.kept.len(),
            outcome.dropped.len()
        );
    }

    outcome
}

/// Batch-internal deduplication only.
pub fn remove_duplicates(items: Vec<Question>, threshold: f64) -> Vec<Question> {
    dedupe(items, &[], threshold).kept
}
