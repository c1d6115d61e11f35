use std::collections::HashMap;

use serde::Serialize;

use crate::{
    config::PipelineSettings,
    models::domain::{
        BatchQuota, Difficulty, GenerationAllowance, GenerationConfig, Question, QuestionType,
        RejectionReason,
    },
    services::balancer::compute_quota,
};

pub type CellKey = (Difficulty, QuestionType);

/// Non-rejected question counts for one discipline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub cells: HashMap<CellKey, usize>,
    /// Non-rejected questions across every discipline.
    pub total: usize,
}

impl CategoryCounts {
    pub fn from_history(discipline: &str, history: &[Question]) -> Self {
        let mut counts = Self::default();
        for q in history.iter().filter(|q| !q.is_rejected()) {
            counts.total += 1;
            if q.discipline == discipline {
                *counts.cells.entry((q.difficulty, q.question_type)).or_default() += 1;
            }
        }
        counts
    }

    pub fn get(&self, difficulty: Difficulty, question_type: QuestionType) -> usize {
        self.cells.get(&(difficulty, question_type)).copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStatus {
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub current: usize,
    pub target: usize,
    pub remaining: usize,
    pub is_full: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    pub discipline: String,
    pub cells: Vec<CellStatus>,
    pub total_current: usize,
    pub total_target: usize,
}

pub fn quota_status(discipline: &str, history: &[Question], settings: &PipelineSettings) -> QuotaStatus {
    let counts = CategoryCounts::from_history(discipline, history);
    let mut cells = Vec::new();
    for difficulty in Difficulty::ALL {
        for question_type in [QuestionType::MultipleChoice, QuestionType::TrueFalse] {
            let current = counts.get(difficulty, question_type);
            cells.push(CellStatus {
                difficulty,
                question_type,
                current,
                target: settings.target_per_category,
                remaining: settings.target_per_category.saturating_sub(current),
                is_full: current >= settings.target_per_category,
            });
        }
    }
    QuotaStatus {
        discipline: discipline.to_string(),
        cells,
        total_current: counts.total,
        total_target: settings.target_total,
    }
}

fn blocked(reason: String, force_type: Option<QuestionType>) -> GenerationAllowance {
    GenerationAllowance {
        allowed: false,
        reason,
        max_allowed: 0,
        force_type,
        warning: false,
    }
}

/// Decides whether `config` may generate against the stored history.
///
/// Checks run in order: total target, remaining room in the requested
/// cells, then Multiple Choice / True/False imbalance per difficulty.
pub fn evaluate_generation(
    config: &GenerationConfig,
    history: &[Question],
    settings: &PipelineSettings,
) -> GenerationAllowance {
    let counts = CategoryCounts::from_history(&config.discipline, history);

    if counts.total >= settings.target_total {
        return blocked(
            format!(
                "Total quota reached ({} questions). No more generation allowed.",
                settings.target_total
            ),
            None,
        );
    }

    let quota = compute_quota(config.batch_size, config.difficulty, config.question_type);
    let remaining: usize = quota
        .cells
        .iter()
        .map(|c| {
            settings
                .target_per_category
                .saturating_sub(counts.get(c.difficulty, c.question_type))
        })
        .sum();

    if remaining == 0 {
        return blocked(
            format!(
                "Requested categories for \"{}\" are full ({}/{}). Select a different difficulty or type.",
                config.discipline, settings.target_per_category, settings.target_per_category
            ),
            None,
        );
    }

    let requested_difficulties = Difficulty::ALL
        .into_iter()
        .filter(|d| quota.for_difficulty(*d) > 0);
    for difficulty in requested_difficulties {
        let mc = counts.get(difficulty, QuestionType::MultipleChoice);
        let tf = counts.get(difficulty, QuestionType::TrueFalse);
        if mc.abs_diff(tf) <= settings.type_imbalance_threshold {
            continue;
        }

        let (needs_more, has_more) = if mc < tf {
            (QuestionType::MultipleChoice, QuestionType::TrueFalse)
        } else {
            (QuestionType::TrueFalse, QuestionType::MultipleChoice)
        };

        if config.question_type.fixed() == Some(has_more) {
            return blocked(
                format!(
                    "Type imbalance detected at {difficulty}: {mc} MC vs {tf} T/F. Generate {needs_more} questions first to restore balance."
                ),
                Some(needs_more),
            );
        }

        return GenerationAllowance {
            allowed: true,
            reason: format!("Imbalance detected ({mc} MC, {tf} T/F). Prioritizing {needs_more}."),
            max_allowed: config.batch_size.min(settings.target_per_category.saturating_sub(counts.get(difficulty, needs_more))),
            force_type: Some(needs_more),
            warning: true,
        };
    }

    let room = remaining.min(settings.target_total - counts.total);
    if quota.batch_size > room {
        return GenerationAllowance {
            allowed: true,
            reason: format!("Only {room} questions remaining for the requested categories. Batch size reduced."),
            max_allowed: room,
            force_type: None,
            warning: true,
        };
    }

    GenerationAllowance {
        allowed: true,
        reason: "Generation allowed".to_string(),
        max_allowed: quota.batch_size,
        force_type: None,
        warning: false,
    }
}

/// Shrinks `quota` so no cell exceeds the room left in its category and the
/// whole batch stays within `max_allowed`. The largest cells give way first.
pub fn fit_quota_to_room(
    quota: BatchQuota,
    discipline: &str,
    history: &[Question],
    max_allowed: usize,
    settings: &PipelineSettings,
) -> BatchQuota {
    let counts = CategoryCounts::from_history(discipline, history);
    let mut cells = quota.cells;
    for cell in cells.iter_mut() {
        let room = settings
            .target_per_category
            .saturating_sub(counts.get(cell.difficulty, cell.question_type));
        cell.count = cell.count.min(room);
    }

    let mut total: usize = cells.iter().map(|c| c.count).sum();
    while total > max_allowed {
        let Some(largest) = cells.iter_mut().max_by_key(|c| c.count) else {
            break;
        };
        largest.count -= 1;
        total -= 1;
    }

    BatchQuota::from_cells(cells)
}

/// Auto-rejects new questions that would overflow their category.
///
/// Returns `(kept, over_quota)`; over-quota records carry
/// [`RejectionReason::QuotaExceeded`].
pub fn cap_to_quota(
    discipline: &str,
    new_items: Vec<Question>,
    history: &[Question],
    settings: &PipelineSettings,
) -> (Vec<Question>, Vec<Question>) {
    let mut counts = CategoryCounts::from_history(discipline, history);
    let mut kept = Vec::new();
    let mut over = Vec::new();

    for mut q in new_items {
        let slot = counts.cells.entry((q.difficulty, q.question_type)).or_default();
        if *slot >= settings.target_per_category || counts.total >= settings.target_total {
            log::warn!(
                "Auto-rejected \"{}\": {} {} quota is full",
                q.question.chars().take(50).collect::<String>(),
                q.difficulty,
                q.question_type.short_label()
            );
            q.reject(RejectionReason::QuotaExceeded);
            over.push(q);
        } else {
            *slot += 1;
            counts.total += 1;
            kept.push(q);
        }
    }

    (kept, over)
}
