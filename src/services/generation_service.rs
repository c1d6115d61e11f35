use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use rand::Rng;

use crate::{
    config::PipelineSettings,
    constants::{
        prompts::{GENERATION_SYSTEM_PROMPT, TRANSLATION_INSTRUCTIONS, TRANSLATION_SYSTEM_PROMPT},
        tag_taxonomy::check_tags,
    },
    errors::{AppError, AppResult},
    models::domain::{
        BatchQuota, Difficulty, GenerationConfig, GenerationReport, Question, QuestionType,
        RejectionReason, TypeSelector,
    },
    repositories::QuestionRepository,
    services::{
        balancer::compute_quota,
        converter::{convert_mc_to_tf, HeuristicRewriter, StatementRewriter},
        coverage::coverage_gaps,
        deduplicator::dedupe,
        model_service::{CompletionRequest, ModelClient},
        output_parser::{parse_or_fail, render_table_row, TABLE_COLUMNS},
        prompt_builder,
        question_validator::{validate_batch, validate_question},
        quota::{cap_to_quota, evaluate_generation, fit_quota_to_room},
    },
};

const TRANSLATION_TEMPERATURE: f32 = 0.2;

fn cell_count(quota: &BatchQuota, difficulty: Difficulty, question_type: QuestionType) -> usize {
    quota
        .cells
        .iter()
        .find(|c| c.difficulty == difficulty && c.question_type == question_type)
        .map_or(0, |c| c.count)
}

fn count_of(questions: &[Question], difficulty: Difficulty, question_type: QuestionType) -> usize {
    questions
        .iter()
        .filter(|q| q.difficulty == difficulty && q.question_type == question_type)
        .count()
}

/// Fills True/False shortfalls of `quota` by converting generated Multiple
/// Choice questions. Multiple Choice beyond its own quota is replaced by the
/// conversion; other sources are kept alongside it.
///
/// Returns the new batch and the number of conversions.
pub fn backfill_true_false<R: Rng + ?Sized>(
    questions: Vec<Question>,
    quota: &BatchQuota,
    rewriter: &dyn StatementRewriter,
    rng: &mut R,
    settings: &PipelineSettings,
) -> (Vec<Question>, usize) {
    let mut shortfall: Vec<Difficulty> = Vec::new();
    for difficulty in Difficulty::ALL {
        let want = cell_count(quota, difficulty, QuestionType::TrueFalse);
        let have = count_of(&questions, difficulty, QuestionType::TrueFalse);
        shortfall.extend(std::iter::repeat(difficulty).take(want.saturating_sub(have)));
    }
    if shortfall.is_empty() {
        return (questions, 0);
    }

    let mut surplus: HashMap<Difficulty, usize> = Difficulty::ALL
        .into_iter()
        .map(|d| {
            let have = count_of(&questions, d, QuestionType::MultipleChoice);
            (d, have.saturating_sub(cell_count(quota, d, QuestionType::MultipleChoice)))
        })
        .collect();

    let mut replaceable = Vec::new();
    let mut keepable = Vec::new();
    for (i, q) in questions.iter().enumerate().rev() {
        if q.question_type != QuestionType::MultipleChoice {
            continue;
        }
        match surplus.get_mut(&q.difficulty) {
            Some(left) if *left > 0 => {
                *left -= 1;
                replaceable.push((i, true));
            }
            _ => keepable.push((i, false)),
        }
    }

    let mut replaced = HashSet::new();
    let mut converted = Vec::new();
    for (target, (i, replace)) in shortfall.into_iter().zip(replaceable.into_iter().chain(keepable)) {
        let mut tf = convert_mc_to_tf(&questions[i], target, rewriter, rng);
        tf.validation = Some(validate_question(&tf, settings));
        if replace {
            replaced.insert(i);
        }
        converted.push(tf);
    }

    let count = converted.len();
    if count > 0 {
        log::info!("Converted {} Multiple Choice question(s) to True/False", count);
    }

    let mut batch: Vec<Question> = questions
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !replaced.contains(i))
        .map(|(_, q)| q)
        .collect();
    batch.extend(converted);
    (batch, count)
}

pub struct GenerationService {
    repository: Arc<dyn QuestionRepository>,
    model: Arc<dyn ModelClient>,
    settings: PipelineSettings,
    default_model: String,
    rewriter: Arc<dyn StatementRewriter>,
}

impl GenerationService {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        model: Arc<dyn ModelClient>,
        settings: PipelineSettings,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            model,
            settings,
            default_model: default_model.into(),
            rewriter: Arc::new(HeuristicRewriter),
        }
    }

    pub fn with_rewriter(mut self, rewriter: Arc<dyn StatementRewriter>) -> Self {
        self.rewriter = rewriter;
        self
    }

    fn model_name(&self, requested: Option<&str>) -> String {
        requested
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.default_model.as_str())
            .to_string()
    }

    /// Runs one generation batch end to end and persists the survivors as
    /// pending review items.
    pub async fn generate(
        &self,
        mut config: GenerationConfig,
        file_context: &str,
    ) -> AppResult<GenerationReport> {
        let settings = &self.settings;
        let history = self.repository.find_all().await?;
        let mut report = GenerationReport::default();

        let allowance = evaluate_generation(&config, &history, settings);
        if !allowance.allowed {
            log::warn!("Generation for \"{}\" blocked: {}", config.discipline, allowance.reason);
            return Err(AppError::QuotaExceeded(allowance.reason));
        }
        if allowance.warning {
            report.notices.push(allowance.reason.clone());
        }
        if let Some(forced) = allowance.force_type {
            config.question_type = TypeSelector::from(forced);
        }
        config.batch_size = config.batch_size.min(allowance.max_allowed);
        if config.batch_size == 0 {
            return Err(AppError::QuotaExceeded(allowance.reason));
        }

        let quota = fit_quota_to_room(
            compute_quota(config.batch_size, config.difficulty, config.question_type),
            &config.discipline,
            &history,
            allowance.max_allowed,
            settings,
        );
        if quota.batch_size == 0 {
            return Err(AppError::QuotaExceeded(allowance.reason));
        }
        report.requested = quota.batch_size;

        let discipline_history: Vec<Question> = history
            .iter()
            .filter(|q| q.discipline == config.discipline)
            .cloned()
            .collect();
        let gaps = coverage_gaps(&config.discipline, &discipline_history, settings.max_coverage_gaps);
        let prompt = prompt_builder::build_with_quota(
            &config,
            &quota,
            file_context,
            &discipline_history,
            &gaps,
            settings,
        );

        let request = CompletionRequest::new(
            self.model_name(config.model.as_deref()),
            GENERATION_SYSTEM_PROMPT,
            prompt,
        )
        .with_temperature(config.temperature);
        let raw = self.model.complete(request).await?;

        let outcome = parse_or_fail(&raw, settings.dedup_threshold)?;
        report.parsed = outcome.questions.len();
        report.duplicates_removed = outcome.duplicates_removed;

        let default_tags = check_tags(&config.tags).valid;
        let parsed: Vec<Question> = outcome
            .questions
            .into_iter()
            .map(|mut q| {
                q.language = config.language.clone();
                if q.tags.is_empty() {
                    q.tags = default_tags.clone();
                }
                q
            })
            .collect();

        let dedup = dedupe(parsed, &[history.as_slice()], settings.dedup_threshold);
        report.duplicates_removed += dedup.dropped.len();

        let (mut fresh, critical): (Vec<Question>, Vec<Question>) = validate_batch(dedup.kept, settings)
            .into_iter()
            .partition(|q| !q.is_critical_failure());
        report.critical_dropped = critical.len();
        for mut q in critical {
            log::warn!(
                "Dropped \"{}\": {}",
                q.question.chars().take(50).collect::<String>(),
                q.validation
                    .as_ref()
                    .map(|v| v.warnings.join("; "))
                    .unwrap_or_default()
            );
            q.reject(RejectionReason::BadSource);
            report.dropped.push(q);
        }

        let (backfilled, converted) = {
            let mut rng = rand::thread_rng();
            backfill_true_false(fresh, &quota, self.rewriter.as_ref(), &mut rng, settings)
        };
        fresh = backfilled;
        report.converted_to_true_false = converted;

        let (kept, over) = cap_to_quota(&config.discipline, fresh, &history, settings);
        report.over_quota = over.len();
        report.dropped.extend(over);

        report.flagged = kept
            .iter()
            .filter(|q| q.validation.as_ref().is_some_and(|v| v.is_flagged()))
            .count();

        report.accepted_into_review = self.repository.insert_many(kept).await?;

        if report.critical_dropped > 0 {
            report.notices.push(format!(
                "{} question(s) dropped for missing or invalid evidence",
                report.critical_dropped
            ));
        }
        if report.flagged > 0 {
            report.notices.push(format!("{} question(s) flagged for review", report.flagged));
        }
        if report.over_quota > 0 {
            report.notices.push(format!(
                "{} question(s) auto-rejected because their category is full",
                report.over_quota
            ));
        }

        log::info!(
            "Generation for \"{}\": {} parsed, {} stored, {} dropped",
            config.discipline,
            report.parsed,
            report.accepted_into_review.len(),
            report.dropped.len()
        );

        Ok(report)
    }

    /// Translates a stored question and stores the accepted variant under the
    /// same `uniqueId`. A translation that fails validation critically is
    /// not stored.
    pub async fn translate_question(
        &self,
        id: &str,
        language: &str,
        model: Option<&str>,
    ) -> AppResult<Question> {
        let original = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))?;

        if original.language.eq_ignore_ascii_case(language) {
            return Err(AppError::ValidationError(format!(
                "Question '{}' is already in {}",
                id, language
            )));
        }

        let separator = vec!["---"; TABLE_COLUMNS.len()].join("|");
        let prompt = format!(
            "{}\nTarget Language: {}\n\n| {} |\n|{}|\n{}",
            TRANSLATION_INSTRUCTIONS,
            language,
            TABLE_COLUMNS.join(" | "),
            separator,
            render_table_row(&original, 1)
        );
        let request = CompletionRequest::new(self.model_name(model), TRANSLATION_SYSTEM_PROMPT, prompt)
            .with_temperature(TRANSLATION_TEMPERATURE);
        let raw = self.model.complete(request).await?;

        let parsed = parse_or_fail(&raw, self.settings.dedup_threshold)?
            .questions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::parse_failure(&raw))?;

        let mut translated = Question::translated_from(&original, parsed, language);
        translated.source_url = original.source_url.clone();
        translated.validation = Some(validate_question(&translated, &self.settings));
        if !translated.accept(false) {
            let warnings = translated
                .validation
                .as_ref()
                .map(|v| v.warnings.join("; "))
                .unwrap_or_default();
            log::warn!(
                "Dropped {} translation of question {}: {}",
                language,
                original.id,
                warnings
            );
            return Err(AppError::UpstreamError(format!(
                "Translation of '{}' failed validation: {}",
                id, warnings
            )));
        }

        let mut stored = self.repository.insert_many(vec![translated]).await?;
        stored
            .pop()
            .ok_or_else(|| AppError::InternalError("Translated question was not stored".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::DifficultySelector;
    use rand::{rngs::StdRng, SeedableRng};

    fn mc(difficulty: Difficulty, text: &str) -> Question {
        Question::new(QuestionType::MultipleChoice, difficulty, "Rendering", text)
            .with_options([("A", "Nanite"), ("B", "Lumen"), ("C", "Chaos"), ("D", "Niagara")])
            .with_correct("A")
            .with_source(
                "https://dev.epicgames.com/documentation/en-us/unreal-engine/nanite-virtualized-geometry-in-unreal-engine",
                "Nanite is Unreal Engine's virtualized geometry system.",
            )
    }

    fn tf(difficulty: Difficulty, text: &str) -> Question {
        Question::new(QuestionType::TrueFalse, difficulty, "Rendering", text).with_correct("A")
    }

    #[test]
    fn test_backfill_replaces_surplus_multiple_choice() {
        let quota = compute_quota(2, DifficultySelector::Easy, TypeSelector::Balanced);
        let batch = vec![mc(Difficulty::Easy, "Which system virtualizes geometry?"), mc(Difficulty::Easy, "Which system streams clusters?")];
        let mut rng = StdRng::seed_from_u64(3);

        let (out, converted) = backfill_true_false(batch, &quota, &HeuristicRewriter, &mut rng, &PipelineSettings::default());
        assert_eq!(converted, 1);
        assert_eq!(out.len(), 2);
        assert_eq!(count_of(&out, Difficulty::Easy, QuestionType::MultipleChoice), 1);
        assert_eq!(count_of(&out, Difficulty::Easy, QuestionType::TrueFalse), 1);
        let converted_q = out.iter().find(|q| q.question_type == QuestionType::TrueFalse).unwrap();
        assert!(converted_q.original_mc.is_some());
        assert!(converted_q.validation.is_some());
    }

    #[test]
    fn test_backfill_keeps_needed_multiple_choice() {
        let quota = compute_quota(2, DifficultySelector::Hard, TypeSelector::Balanced);
        let batch = vec![mc(Difficulty::Hard, "Which system virtualizes geometry?")];
        let mut rng = StdRng::seed_from_u64(3);

        let (out, converted) = backfill_true_false(batch, &quota, &HeuristicRewriter, &mut rng, &PipelineSettings::default());
        assert_eq!(converted, 1);
        assert_eq!(out.len(), 2);
        assert_eq!(count_of(&out, Difficulty::Hard, QuestionType::MultipleChoice), 1);
    }

    #[test]
    fn test_backfill_noop_when_true_false_quota_met() {
        let quota = compute_quota(2, DifficultySelector::Medium, TypeSelector::Balanced);
        let batch = vec![mc(Difficulty::Medium, "Which system virtualizes geometry?"), tf(Difficulty::Medium, "Lumen is dynamic.")];
        let mut rng = StdRng::seed_from_u64(3);

        let (out, converted) = backfill_true_false(batch.clone(), &quota, &HeuristicRewriter, &mut rng, &PipelineSettings::default());
        assert_eq!(converted, 0);
        assert_eq!(out, batch);
    }

    #[test]
    fn test_backfill_ignores_multiple_choice_only_quota() {
        let quota = compute_quota(3, DifficultySelector::Easy, TypeSelector::MultipleChoice);
        let batch = vec![mc(Difficulty::Easy, "Which system virtualizes geometry?")];
        let mut rng = StdRng::seed_from_u64(3);

        let (_, converted) = backfill_true_false(batch, &quota, &HeuristicRewriter, &mut rng, &PipelineSettings::default());
        assert_eq!(converted, 0);
    }
}
