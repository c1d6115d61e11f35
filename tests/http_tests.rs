mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use question_forge::{
    app_state::AppState,
    handlers,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    repositories::QuestionRepository,
};

use common::{mc_row, table, test_config, tf_row, InMemoryQuestionRepository, ScriptedModelClient};

const LUMEN_EXCERPT: &str =
    "Lumen is Unreal Engine's fully dynamic global illumination and reflections system.";

fn state(repo: Arc<InMemoryQuestionRepository>, model: ScriptedModelClient) -> AppState {
    AppState::with_components(test_config(), repo, Arc::new(model))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .wrap(RequestIdMiddleware)
                .configure(handlers::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_reports_healthy_with_request_id() {
    let app = app!(state(
        Arc::new(InMemoryQuestionRepository::new()),
        ScriptedModelClient::new(Vec::new())
    ));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_parse_endpoint_returns_records() {
    let app = app!(state(
        Arc::new(InMemoryQuestionRepository::new()),
        ScriptedModelClient::new(Vec::new())
    ));

    let raw = table(&[mc_row(
        1,
        "Easy",
        "Which system provides dynamic global illumination?",
        LUMEN_EXCERPT,
    )]);
    let req = test::TestRequest::post()
        .uri("/api/pipeline/parse")
        .set_json(json!({ "raw": raw }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["mode"], "table");
    assert_eq!(body["questions"].as_array().unwrap().len(), 1);
    assert_eq!(body["questions"][0]["status"], "pending");
}

#[actix_web::test]
async fn test_parse_endpoint_maps_empty_result_to_unprocessable() {
    let app = app!(state(
        Arc::new(InMemoryQuestionRepository::new()),
        ScriptedModelClient::new(Vec::new())
    ));

    let req = test::TestRequest::post()
        .uri("/api/pipeline/parse")
        .set_json(json!({ "raw": "no table here" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "PARSE_FAILURE");
}

#[actix_web::test]
async fn test_convert_rejects_true_false_input() {
    let app = app!(state(
        Arc::new(InMemoryQuestionRepository::new()),
        ScriptedModelClient::new(Vec::new())
    ));

    let question = json!({
        "id": "q-1",
        "uniqueId": "q-1",
        "discipline": "Lighting & Rendering",
        "type": "True/False",
        "difficulty": "Easy",
        "question": "Lumen supports hardware ray tracing.",
        "options": { "A": "TRUE", "B": "FALSE" },
        "correct": "A"
    });
    let req = test::TestRequest::post()
        .uri("/api/pipeline/convert")
        .set_json(json!({ "question": question }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_quotas_endpoint_reports_split() {
    let app = app!(state(
        Arc::new(InMemoryQuestionRepository::new()),
        ScriptedModelClient::new(Vec::new())
    ));

    let req = test::TestRequest::post()
        .uri("/api/pipeline/quotas")
        .set_json(json!({
            "discipline": "Blueprints",
            "difficulty": "Balanced",
            "type": "Balanced",
            "batchSize": 6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["quota"]["batchSize"], 6);
    assert_eq!(body["allowance"]["allowed"], true);
}

#[actix_web::test]
async fn test_generation_endpoint_creates_questions() {
    let repo = Arc::new(InMemoryQuestionRepository::new());
    let model = ScriptedModelClient::replying(table(&[
        mc_row(1, "Easy", "Which system provides dynamic global illumination?", LUMEN_EXCERPT),
        tf_row(2, "Easy", "<b>Lumen</b> reacts to lighting changes at runtime.", LUMEN_EXCERPT),
    ]));
    let app = app!(state(repo.clone(), model));

    let req = test::TestRequest::post()
        .uri("/api/generations")
        .set_json(json!({
            "config": {
                "discipline": "Lighting & Rendering",
                "difficulty": "Easy",
                "type": "Balanced",
                "batchSize": 2
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[actix_web::test]
async fn test_generation_endpoint_rejects_invalid_config() {
    let app = app!(state(
        Arc::new(InMemoryQuestionRepository::new()),
        ScriptedModelClient::new(Vec::new())
    ));

    let req = test::TestRequest::post()
        .uri("/api/generations")
        .set_json(json!({
            "config": { "discipline": "", "difficulty": "Easy", "type": "Balanced" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_critique_unknown_question_is_not_found() {
    let app = app!(state(
        Arc::new(InMemoryQuestionRepository::new()),
        ScriptedModelClient::new(Vec::new())
    ));

    let req = test::TestRequest::post()
        .uri("/api/questions/missing/critique")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
