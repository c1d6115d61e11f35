use crate::models::domain::{
    BatchQuota, Difficulty, DifficultySelector, QuestionType, QuotaCell, TypeSelector,
};

fn round_up_to_multiple(n: usize, m: usize) -> usize {
    n.div_ceil(m) * m
}

/// Splits `count` between the question types the selector allows.
fn split_types(count: usize, types: TypeSelector) -> (usize, usize) {
    match types {
        TypeSelector::MultipleChoice => (count, 0),
        TypeSelector::TrueFalse => (0, count),
        TypeSelector::Balanced => {
            let mc = count / 2;
            (mc, count - mc)
        }
    }
}

/// Computes exact per-difficulty and per-type targets for a batch.
///
/// A balanced difficulty rounds the batch up to a multiple of 6 so each of
/// the three difficulties splits evenly across both types; a fixed difficulty
/// with balanced types rounds up to a multiple of 2.
pub fn compute_quota(batch_size: usize, difficulty: DifficultySelector, types: TypeSelector) -> BatchQuota {
    let (batch_size, per_difficulty) = match difficulty.fixed() {
        None => {
            let total = round_up_to_multiple(batch_size, 6);
            let base = total / 3;
            (total, [base, base, base + total % 3])
        }
        Some(fixed) => {
            let total = if types == TypeSelector::Balanced {
                round_up_to_multiple(batch_size, 2)
            } else {
                batch_size
            };
            let mut counts = [0; 3];
            for (slot, d) in counts.iter_mut().zip(Difficulty::ALL) {
                if d == fixed {
                    *slot = total;
                }
            }
            (total, counts)
        }
    };

    let mut cells = Vec::new();
    let mut multiple_choice = 0;
    let mut true_false = 0;
    for (difficulty, count) in Difficulty::ALL.into_iter().zip(per_difficulty) {
        let (mc, tf) = split_types(count, types);
        multiple_choice += mc;
        true_false += tf;
        for (question_type, n) in [(QuestionType::MultipleChoice, mc), (QuestionType::TrueFalse, tf)] {
            if n > 0 {
                cells.push(QuotaCell {
                    difficulty,
                    question_type,
                    count: n,
                });
            }
        }
    }

    BatchQuota {
        batch_size,
        easy: per_difficulty[0],
        medium: per_difficulty[1],
        hard: per_difficulty[2],
        multiple_choice,
        true_false,
        cells,
    }
}
