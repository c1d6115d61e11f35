use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of checking a source URL against the documentation site.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UrlCheck {
    pub is_valid: bool,
    pub confidence: u8,
    pub warning: Option<String>,
    /// Empty URLs are a soft failure, distinct from malformed ones.
    #[serde(default)]
    pub is_missing: bool,
}

impl UrlCheck {
    pub fn valid(confidence: u8, warning: Option<String>) -> Self {
        Self {
            is_valid: true,
            confidence,
            warning,
            is_missing: false,
        }
    }

    pub fn invalid(confidence: u8, warning: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            confidence,
            warning: Some(warning.into()),
            is_missing: false,
        }
    }

    pub fn missing() -> Self {
        Self {
            is_missing: true,
            ..Self::invalid(0, "Missing documentation URL")
        }
    }
}

/// Outcome of matching the correct answer's key terms against the excerpt.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCheck {
    pub is_valid: bool,
    pub confidence: u8,
    pub warning: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub answer_terms: Vec<String>,
    #[serde(default)]
    pub matched_terms: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
pub struct ValidationDetails {
    pub url: Option<UrlCheck>,
    pub answer: Option<AnswerCheck>,
}

/// Result attached to each question as `_validation`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub is_critical_failure: bool,
    pub confidence: u8,
    pub warnings: Vec<String>,
    #[serde(default)]
    pub details: ValidationDetails,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            is_critical_failure: false,
            confidence: 100,
            warnings: Vec::new(),
            details: ValidationDetails::default(),
        }
    }
}

impl ValidationResult {
    /// Kept but needs a reviewer's attention.
    pub fn is_flagged(&self) -> bool {
        !self.is_critical_failure && !self.warnings.is_empty()
    }
}
