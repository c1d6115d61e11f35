pub mod answer_validator;
pub mod balancer;
pub mod converter;
pub mod coverage;
pub mod critique_policy;
pub mod critique_service;
pub mod deduplicator;
pub mod generation_service;
pub mod model_service;
pub mod output_parser;
pub mod prompt_builder;
pub mod question_validator;
pub mod quota;
pub mod similarity;
pub mod url_validator;
