use std::fmt::Write;

use crate::{
    config::PipelineSettings,
    constants::{
        prompts::{
            GENERATOR_ROLE, JSON_RULES, SOURCING_RULES, STYLE_EXAMPLES, TABLE_RULES,
            TRUE_FALSE_RULES,
        },
        tag_taxonomy::merged_tags,
    },
    models::domain::{
        BatchQuota, Difficulty, GenerationConfig, OutputFormat, Question, QuestionType,
        RejectionReason, TypeSelector,
    },
    services::{
        balancer::compute_quota,
        output_parser::{generated_row_schema, TABLE_COLUMNS},
    },
};

fn type_scope(types: TypeSelector) -> &'static str {
    match types {
        TypeSelector::MultipleChoice => "Multiple Choice ONLY",
        TypeSelector::TrueFalse => "True/False ONLY",
        TypeSelector::Balanced => "Multiple Choice and True/False",
    }
}

fn table_header() -> String {
    let separator = vec!["---"; TABLE_COLUMNS.len()].join("|");
    format!("| {} |\n|{}|", TABLE_COLUMNS.join(" | "), separator)
}

fn quota_section(quota: &BatchQuota) -> String {
    let mut out = String::from("Output:\n");
    let _ = writeln!(
        out,
        "- **OUTPUT INSTRUCTION:** Generate EXACTLY {} questions: {} Easy, {} Medium, {} Hard; {} Multiple Choice and {} True/False.",
        quota.batch_size, quota.easy, quota.medium, quota.hard, quota.multiple_choice, quota.true_false
    );
    out.push_str("- Exact breakdown:\n");
    for cell in &quota.cells {
        let _ = writeln!(out, "  - {} {}: {}", cell.difficulty, cell.question_type, cell.count);
    }
    out.push_str("VERIFICATION CHECKLIST (check before answering):\n");
    let _ = writeln!(out, "- [ ] Total rows = {}", quota.batch_size);
    for difficulty in Difficulty::ALL {
        let n = quota.for_difficulty(difficulty);
        if n > 0 {
            let _ = writeln!(out, "- [ ] {difficulty} rows = {n}");
        }
    }
    for question_type in [QuestionType::MultipleChoice, QuestionType::TrueFalse] {
        let _ = writeln!(out, "- [ ] {question_type} rows = {}", quota.for_type(question_type));
    }
    out.push_str("- [ ] Every row has a SourceExcerpt that proves the correct answer\n");
    out
}

/// Same-discipline rejected records, newest rejection first.
fn recent_rejections<'a>(discipline: &str, rejected: &'a [Question], limit: usize) -> Vec<&'a Question> {
    let mut same: Vec<&Question> = rejected
        .iter()
        .filter(|q| q.is_rejected() && q.discipline == discipline)
        .collect();
    same.sort_by(|a, b| b.rejected_at.cmp(&a.rejected_at));
    same.truncate(limit);
    same
}

fn failure_section(examples: &[&Question]) -> String {
    let mut out = String::from(
        "CRITICAL: FAILURE AVOIDANCE\nThese questions were REJECTED by reviewers. Do NOT repeat their mistakes:\n",
    );
    for (i, q) in examples.iter().enumerate() {
        let reason = q.rejection_reason.unwrap_or(RejectionReason::Other);
        let _ = writeln!(out, "{}. \"{}\"", i + 1, q.question);
        let _ = writeln!(out, "   Reason: {}", reason.label());
        if let Some(critique) = q.critique.as_deref().filter(|c| !c.trim().is_empty()) {
            let _ = writeln!(out, "   Critique: {critique}");
        }
    }
    out
}

/// Assembles the generator prompt for one batch.
///
/// Deterministic for identical inputs. Sections appear in a fixed order;
/// failure avoidance, coverage gaps, custom rules and file context are
/// only included when non-empty.
pub fn build(
    config: &GenerationConfig,
    file_context: &str,
    rejected: &[Question],
    coverage_gaps: &[String],
    settings: &PipelineSettings,
) -> String {
    let quota = compute_quota(config.batch_size, config.difficulty, config.question_type);
    build_with_quota(config, &quota, file_context, rejected, coverage_gaps, settings)
}

/// [`build`] against an already fitted quota.
pub fn build_with_quota(
    config: &GenerationConfig,
    quota: &BatchQuota,
    file_context: &str,
    rejected: &[Question],
    coverage_gaps: &[String],
    settings: &PipelineSettings,
) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(GENERATOR_ROLE.to_string());
    sections.push(format!(
        "Discipline: {}\nTarget Language: {}\nQuestion Type: {}\n**LANGUAGE STRICTNESS:** Output ONLY in {}. Do NOT provide bilingual text.",
        config.discipline,
        config.language,
        type_scope(config.question_type),
        config.language
    ));

    let tags = merged_tags(&config.discipline, &config.tags);
    if !tags.is_empty() {
        sections.push(format!("Topic tags for this discipline: {}", tags.join(", ")));
    }

    sections.push(match config.output_format {
        OutputFormat::MarkdownTable => format!("Question Format:\n{}\n{}", table_header(), TABLE_RULES),
        OutputFormat::Json => format!(
            "Question Format:\n{}\nEach element must match this JSON schema:\n{}",
            JSON_RULES,
            generated_row_schema()
        ),
    });
    sections.push(TRUE_FALSE_RULES.to_string());
    sections.push(SOURCING_RULES.to_string());
    sections.push(STYLE_EXAMPLES.to_string());
    sections.push(quota_section(quota));

    let examples = recent_rejections(&config.discipline, rejected, settings.max_rejected_examples);
    if !examples.is_empty() {
        sections.push(failure_section(&examples));
    }

    if !coverage_gaps.is_empty() {
        sections.push(format!(
            "COVERAGE GAPS: these topics are under-represented. Prefer them:\n{}",
            coverage_gaps.join(", ")
        ));
    }

    if let Some(rules) = config.custom_rules.as_deref().filter(|r| !r.trim().is_empty()) {
        sections.push(format!("Additional rules:\n{}", rules.trim()));
    }

    if !file_context.trim().is_empty() {
        sections.push(format!("Attached Local Files:\n{}", file_context.trim()));
    }

    sections.join("\n\n")
}
