use std::collections::HashMap;

use crate::{
    constants::tag_taxonomy::{normalize_tag, tags_for_discipline},
    models::domain::Question,
};

/// Canonical tags of `discipline` ordered from least to most covered by
/// non-rejected history, truncated to `limit`. Ties keep taxonomy order.
pub fn coverage_gaps(discipline: &str, history: &[Question], limit: usize) -> Vec<String> {
    let canonical = tags_for_discipline(discipline);
    if canonical.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for q in history
        .iter()
        .filter(|q| q.discipline == discipline && !q.is_rejected())
    {
        for tag in &q.tags {
            *counts.entry(normalize_tag(tag)).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = canonical
        .iter()
        .map(|tag| (*tag, counts.get(*tag).copied().unwrap_or(0)))
        .collect();
    ranked.sort_by_key(|(_, count)| *count);

    ranked
        .into_iter()
        .take(limit)
        .map(|(tag, _)| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Difficulty, QuestionType, RejectionReason};

    fn tagged(tags: &[&str]) -> Question {
        let mut q = Question::new(QuestionType::TrueFalse, Difficulty::Easy, "Technical Art", "Tagged");
        q.tags = tags.iter().map(|t| t.to_string()).collect();
        q
    }

    #[test]
    fn test_uncovered_tags_come_first() {
        let history = vec![tagged(&["#Nanite", "LODs"]), tagged(&["#Nanite"])];
        let gaps = coverage_gaps("Technical Art", &history, 15);

        assert_eq!(gaps.len(), 15);
        assert_eq!(gaps[13], "#LODs");
        assert_eq!(gaps[14], "#Nanite");
        assert_eq!(gaps[0], "#MeshOptimization");
    }

    #[test]
    fn test_rejected_history_is_ignored() {
        let mut rejected = tagged(&["#Nanite"]);
        rejected.reject(RejectionReason::Incorrect);
        let gaps = coverage_gaps("Technical Art", &[rejected], 1);
        assert_eq!(gaps, vec!["#Nanite".to_string()]);
    }

    #[test]
    fn test_unknown_discipline_has_no_gaps() {
        assert!(coverage_gaps("Underwater Basket Weaving", &[], 8).is_empty());
    }
}
