use std::env;
use secrecy::SecretString;

/// Product-tuning constants for the generation pipeline.
///
/// Every value can be overridden through the environment; the defaults are
/// the thresholds the review workflow was calibrated against.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineSettings {
    /// Question similarity at or above which two questions are duplicates.
    pub dedup_threshold: f64,
    pub max_critique_attempts: u32,
    pub critique_passing_score: u8,
    /// Answer-match confidence below which the answer is considered absent.
    pub answer_missing_below: u8,
    /// Answer-match confidence below which the match is too weak to be valid.
    pub answer_low_below: u8,
    /// Answer-match confidence below which a "verify" warning is attached.
    pub answer_moderate_below: u8,
    pub min_excerpt_len: usize,
    pub max_rejected_examples: usize,
    pub max_coverage_gaps: usize,
    pub target_per_category: usize,
    pub target_total: usize,
    pub type_imbalance_threshold: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            dedup_threshold: 0.85,
            max_critique_attempts: 3,
            critique_passing_score: 70,
            answer_missing_below: 30,
            answer_low_below: 50,
            answer_moderate_below: 70,
            min_excerpt_len: 20,
            max_rejected_examples: 5,
            max_coverage_gaps: 8,
            target_per_category: 33,
            target_total: 200,
            type_imbalance_threshold: 3,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl PipelineSettings {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            dedup_threshold: env_or("DEDUP_THRESHOLD", d.dedup_threshold),
            max_critique_attempts: env_or("MAX_CRITIQUE_ATTEMPTS", d.max_critique_attempts),
            critique_passing_score: env_or("CRITIQUE_PASSING_SCORE", d.critique_passing_score),
            answer_missing_below: env_or("ANSWER_MISSING_BELOW", d.answer_missing_below),
            answer_low_below: env_or("ANSWER_LOW_BELOW", d.answer_low_below),
            answer_moderate_below: env_or("ANSWER_MODERATE_BELOW", d.answer_moderate_below),
            min_excerpt_len: env_or("MIN_EXCERPT_LEN", d.min_excerpt_len),
            max_rejected_examples: env_or("MAX_REJECTED_EXAMPLES", d.max_rejected_examples),
            max_coverage_gaps: env_or("MAX_COVERAGE_GAPS", d.max_coverage_gaps),
            target_per_category: env_or("TARGET_PER_CATEGORY", d.target_per_category),
            target_total: env_or("TARGET_TOTAL", d.target_total),
            type_imbalance_threshold: env_or("TYPE_IMBALANCE_THRESHOLD", d.type_imbalance_threshold),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: SecretString,
    pub openai_base_url: String,
    pub default_model: String,
    pub pipeline: PipelineSettings,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "question-forge-local".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "questions".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_default(),
            ),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            default_model: env::var("DEFAULT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            pipeline: PipelineSettings::from_env(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Validate that production-critical configuration is set
    /// Panics if the model API key is missing in production
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if !self.is_production() {
            return;
        }

        if self.openai_api_key.expose_secret().trim().is_empty() {
            panic!("FATAL: OPENAI_API_KEY is not set! Generation cannot run without a model key.");
        }

        if self.pipeline.dedup_threshold <= 0.0 || self.pipeline.dedup_threshold > 1.0 {
            panic!(
                "FATAL: DEDUP_THRESHOLD must be in (0, 1], got {}",
                self.pipeline.dedup_threshold
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "question-forge-test".to_string(),
            questions_collection: "questions".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_key: SecretString::from("test-key".to_string()),
            openai_base_url: "http://localhost:9999/v1".to_string(),
            default_model: "test-model".to_string(),
            pipeline: PipelineSettings::default(),
        }
    }
}
