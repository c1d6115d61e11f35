pub mod generation_handler;
pub mod health_handler;
pub mod pipeline_handler;

use actix_web::web;

pub use generation_handler::{apply_rewrite, critique_question, generate_questions, translate_question};
pub use health_handler::health_check;
pub use pipeline_handler::{
    build_prompt, check_quotas, convert_question, dedupe_questions, parse_output, validate_questions,
};

/// Registers every route on an actix app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(parse_output)
        .service(validate_questions)
        .service(dedupe_questions)
        .service(convert_question)
        .service(check_quotas)
        .service(build_prompt)
        .service(generate_questions)
        .service(critique_question)
        .service(apply_rewrite)
        .service(translate_question);
}
