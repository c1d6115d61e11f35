use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        question::{FALSE_LABEL, OPTION_LETTERS, TRUE_LABEL},
        Difficulty, Question, QuestionType,
    },
    services::deduplicator::remove_duplicates,
};

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[A-Za-z0-9_-]*").expect("CODE_FENCE is a valid regex pattern"));
static HEADER_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\|\s*ID\s*\|").expect("HEADER_ROW is a valid regex pattern"));
static LEADING_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|?\s*:?\s*-+").expect("LEADING_SEPARATOR is a valid regex pattern")
});
static INNER_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\|\s*:?\s*-{2,}\s*:?\s*\|").expect("INNER_SEPARATOR is a valid regex pattern")
});
static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("FIRST_NUMBER is a valid regex pattern"));

/// Table columns in the order the generator is instructed to emit them.
pub const TABLE_COLUMNS: [&str; 14] = [
    "ID",
    "Discipline",
    "Type",
    "Difficulty",
    "Question",
    "Answer",
    "OptionA",
    "OptionB",
    "OptionC",
    "OptionD",
    "CorrectLetter",
    "SourceURL",
    "SourceExcerpt",
    "QualityScore",
];

const COL_DISCIPLINE: usize = 1;
const COL_TYPE: usize = 2;
const COL_DIFFICULTY: usize = 3;
const COL_QUESTION: usize = 4;
const COL_OPTION_A: usize = 6;
const COL_CORRECT: usize = 10;
const COL_SOURCE_URL: usize = 11;
const COL_SOURCE_EXCERPT: usize = 12;
const COL_QUALITY: usize = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    Json,
    Table,
}

/// A row or item the parser refused, kept for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedItem {
    pub preview: String,
    pub reason: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub mode: ParseMode,
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedItem>,
    pub duplicates_removed: usize,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// One generated question as emitted in JSON mode. Scalars of any JSON
/// type are accepted and read as text.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct GeneratedRow {
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub discipline: String,
    #[serde(rename = "Type", default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub question_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub option_a: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub option_b: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub option_c: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub option_d: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub correct_letter: String,
    #[serde(rename = "SourceURL", default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub source_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub source_excerpt: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "u8")]
    pub quality_score: String,
}

/// Optional sign then leading digits, clamped to 0..=100. Negative scores are dropped.
fn parse_quality_score(raw: &str) -> Option<u8> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: u64 = digits[..end].parse().ok()?;
    if negative && value > 0 {
        return None;
    }
    Some(value.min(100) as u8)
}

fn normalize_correct(letter: &str, question_type: QuestionType) -> String {
    let letter = letter.trim().to_uppercase();
    match (question_type, letter.as_str()) {
        (QuestionType::TrueFalse, TRUE_LABEL) => "A".to_string(),
        (QuestionType::TrueFalse, FALSE_LABEL) => "B".to_string(),
        _ => letter,
    }
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

fn build_question(
    discipline: &str,
    type_label: &str,
    difficulty: &str,
    text: &str,
    options: [&str; 4],
    correct: &str,
) -> Question {
    let question_type = QuestionType::from_label(type_label);
    let discipline = if discipline.trim().is_empty() {
        "General"
    } else {
        discipline.trim()
    };

    let mut question = Question::new(
        question_type,
        Difficulty::from_label(difficulty),
        discipline,
        text.trim(),
    );
    if question_type == QuestionType::MultipleChoice {
        question = question.with_options(OPTION_LETTERS.into_iter().zip(options.map(str::trim)));
    }
    question.correct = normalize_correct(correct, question_type);
    question
}

/// Structural problems that make a record unusable whatever its mode.
fn structural_issue(question: &Question) -> Option<String> {
    if question.question.is_empty() {
        return Some("empty question text".to_string());
    }
    if question.correct.is_empty() {
        return Some("empty correct letter".to_string());
    }
    if !question.options.contains_key(&question.correct) {
        return Some(format!("correct letter {} has no option", question.correct));
    }
    None
}

/// Removes Markdown code fences around model output.
pub fn strip_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

fn parse_json(text: &str, skipped: &mut Vec<SkippedItem>) -> Option<Vec<Question>> {
    let value: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(err) => {
            log::debug!("JSON parse failed, falling back to table mode: {}", err);
            return None;
        }
    };

    let items = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => return None,
    };

    let mut questions = Vec::with_capacity(items.len());
    for item in items {
        let row: GeneratedRow = match serde_json::from_value(item.clone()) {
            Ok(row) => row,
            Err(err) => {
                skipped.push(SkippedItem {
                    preview: preview(&item.to_string()),
                    reason: format!("not a question object: {err}"),
                });
                continue;
            }
        };

        let mut question = build_question(
            &row.discipline,
            &row.question_type,
            &row.difficulty,
            &row.question,
            [&row.option_a, &row.option_b, &row.option_c, &row.option_d],
            &row.correct_letter,
        );
        question.source_url = row.source_url.trim().to_string();
        question.source_excerpt = row.source_excerpt.trim().to_string();
        question.quality_score = parse_quality_score(&row.quality_score);

        match structural_issue(&question) {
            Some(reason) => skipped.push(SkippedItem {
                preview: preview(&question.question),
                reason,
            }),
            None => questions.push(question),
        }
    }
    Some(questions)
}

pub fn is_data_line(line: &str) -> bool {
    line.matches('|').count() >= 4
        && !HEADER_ROW.is_match(line)
        && !LEADING_SEPARATOR.is_match(line)
        && !INNER_SEPARATOR.is_match(line)
}

fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

fn is_bare_letter(option: &str) -> bool {
    let option = option.trim();
    option.len() == 1 && matches!(option.to_ascii_uppercase().as_str(), "A" | "B" | "C" | "D")
}

fn parse_table_row(line: &str) -> Result<Question, String> {
    let cells = split_cells(line);
    let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");

    let text = cell(COL_QUESTION);
    let letter = cell(COL_CORRECT);
    if text.is_empty() || letter.is_empty() {
        return Err("missing question or correct letter".to_string());
    }
    if text.contains("---") {
        return Err("separator fragment in question text".to_string());
    }

    let options = [
        cell(COL_OPTION_A),
        cell(COL_OPTION_A + 1),
        cell(COL_OPTION_A + 2),
        cell(COL_OPTION_A + 3),
    ];
    let question_type = QuestionType::from_label(cell(COL_TYPE));
    if question_type == QuestionType::MultipleChoice && options.iter().any(|o| is_bare_letter(o)) {
        return Err("option text is a bare letter".to_string());
    }

    let mut question = build_question(
        cell(COL_DISCIPLINE),
        cell(COL_TYPE),
        cell(COL_DIFFICULTY),
        text,
        options,
        letter,
    );

    let url = cell(COL_SOURCE_URL);
    question.source_url = if url.contains(' ') {
        String::new()
    } else {
        url.to_string()
    };
    question.source_excerpt = cell(COL_SOURCE_EXCERPT).to_string();
    question.quality_score = FIRST_NUMBER
        .find(cell(COL_QUALITY))
        .and_then(|m| parse_quality_score(m.as_str()));

    match structural_issue(&question) {
        Some(reason) => Err(reason),
        None => Ok(question),
    }
}

fn parse_table(text: &str, skipped: &mut Vec<SkippedItem>) -> Vec<Question> {
    let normalized = text.replace('｜', "|");
    normalized
        .lines()
        .map(str::trim)
        .filter(|line| is_data_line(line))
        .filter_map(|line| match parse_table_row(line) {
            Ok(question) => Some(question),
            Err(reason) => {
                skipped.push(SkippedItem {
                    preview: preview(line),
                    reason,
                });
                None
            }
        })
        .collect()
}

/// Parses raw generator output and reports what was dropped along the way.
pub fn parse_detailed(raw: &str, dedup_threshold: f64) -> ParseOutcome {
    let text = strip_fences(raw);
    let mut skipped = Vec::new();

    let json = if text.starts_with('[') || text.starts_with('{') {
        parse_json(&text, &mut skipped)
    } else {
        None
    };

    let (mode, parsed) = match json {
        Some(questions) => (ParseMode::Json, questions),
        None => (ParseMode::Table, parse_table(&text, &mut skipped)),
    };

    for item in &skipped {
        log::warn!("Skipped generated item \"{}\": {}", item.preview, item.reason);
    }

    let before = parsed.len();
    let questions = remove_duplicates(parsed, dedup_threshold);
    let duplicates_removed = before - questions.len();

    log::info!(
        "Parsed {} question(s) in {:?} mode ({} skipped, {} duplicate(s))",
        questions.len(),
        mode,
        skipped.len(),
        duplicates_removed
    );

    ParseOutcome {
        mode,
        questions,
        skipped,
        duplicates_removed,
    }
}

/// Converts raw generator text into canonical question records.
pub fn parse(raw: &str, dedup_threshold: f64) -> Vec<Question> {
    parse_detailed(raw, dedup_threshold).questions
}

/// Like [`parse_detailed`] but treats an empty result as a failure.
pub fn parse_or_fail(raw: &str, dedup_threshold: f64) -> AppResult<ParseOutcome> {
    let outcome = parse_detailed(raw, dedup_threshold);
    if outcome.questions.is_empty() {
        return Err(AppError::parse_failure(raw));
    }
    Ok(outcome)
}

fn table_cell(text: &str) -> String {
    text.replace(['|', '｜'], "/").replace('\n', " ").trim().to_string()
}

/// Renders one question as a row of the generator's table format.
pub fn render_table_row(question: &Question, row_id: usize) -> String {
    let option = |letter: &str| {
        question
            .options
            .get(letter)
            .map(|o| table_cell(o))
            .unwrap_or_default()
    };
    let cells = [
        row_id.to_string(),
        table_cell(&question.discipline),
        question.question_type.label().to_string(),
        question.difficulty.label().to_string(),
        table_cell(&question.question),
        question.correct_answer_text().map(table_cell).unwrap_or_default(),
        option("A"),
        option("B"),
        option("C"),
        option("D"),
        question.correct.clone(),
        table_cell(&question.source_url),
        table_cell(&question.source_excerpt),
        question
            .quality_score
            .map(|s| s.to_string())
            .unwrap_or_default(),
    ];
    format!("| {} |", cells.join(" | "))
}

/// JSON schema of a generated row, embedded in prompts asking for JSON output.
pub fn generated_row_schema() -> String {
    let schema = schemars::schema_for!(GeneratedRow);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
