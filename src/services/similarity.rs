use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("HTML_TAG is a valid regex pattern"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE is a valid regex pattern"));

/// Above this many normalized characters the quadratic edit distance is
/// replaced by a word-set comparison.
pub const EDIT_DISTANCE_MAX_LEN: usize = 500;

/// Lowercases, strips HTML tags and collapses whitespace.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = HTML_TAG.replace_all(&lower, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Similarity in `[0, 1]`; 1 means equal after normalization.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a = normalize(a);
    let b = normalize(b);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.len() > EDIT_DISTANCE_MAX_LEN || b_chars.len() > EDIT_DISTANCE_MAX_LEN {
        return jaccard(&a, &b);
    }

    let max_len = a_chars.len().max(b_chars.len());
    let distance = levenshtein(&a_chars, &b_chars);
    1.0 - distance as f64 / max_len as f64
}

/// Full-matrix edit distance.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut matrix = vec![vec![0usize; cols]; rows];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..cols {
        matrix[0][j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}

fn jaccard(a: &str, b: &str) -> f64 {
    let a_words: HashSet<&str> = a.split(' ').collect();
    let b_words: HashSet<&str> = b.split(' ').collect();

    let union = a_words.union(&b_words).count();
    if union == 0 {
        return 0.0;
    }
    a_words.intersection(&b_words).count() as f64 / union as f64
}
