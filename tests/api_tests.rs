use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use game_catalog::{
    error::AppResult,
    models::{BuiltQuery, RawRecord},
    routes::{create_router, AppState},
    services::providers::CatalogProvider,
};

/// Serves a fixed payload for every query
struct StaticProvider {
    candidates: Vec<RawRecord>,
}

#[async_trait::async_trait]
impl CatalogProvider for StaticProvider {
    async fn query(&self, _endpoint: &str, _query: &BuiltQuery) -> AppResult<Vec<RawRecord>> {
        Ok(self.candidates.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

fn create_test_server(candidates: Vec<RawRecord>) -> TestServer {
    let state = Arc::new(AppState::new(Arc::new(StaticProvider { candidates }), "games"));
    TestServer::new(create_router(state)).unwrap()
}

fn celeste() -> Value {
    json!({
        "id": 26226,
        "name": "Celeste",
        "release_dates": [{"y": 2018}],
        "category": 0,
        "platforms": [{"name": "Nintendo Switch"}, {"name": "PC (Microsoft Windows)"}],
        "genres": [{"name": "Platform"}, {"name": "Indie"}],
        "age_ratings": [{"rating": 8}],
        "rating_count": 512,
        "involved_companies": [{"company": {"name": "Maddy Makes Games"}}]
    })
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(vec![]);
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_echoed() {
    let server = create_test_server(vec![]);
    let response = server.get("/health").await;
    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_lookup_returns_canonical_record() {
    let server = create_test_server(vec![celeste(), json!({"id": 2, "name": "Celeste Classic"})]);

    let response = server
        .get("/api/v1/games/lookup")
        .add_query_param("title", "Celeste")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let games = body["games"].as_array().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["id"], 26226);
    assert_eq!(games[0]["release_year"], 2018);
    assert_eq!(games[0]["category"], "main_game");
    assert_eq!(games[0]["age_ratings"], json!(["E"]));
    assert_eq!(games[0]["themes"], Value::Null);
    assert_eq!(body["warning"], Value::Null);
}

#[tokio::test]
async fn test_lookup_not_found_is_empty() {
    let server = create_test_server(vec![]);
    let response = server
        .get("/api/v1/games/lookup")
        .add_query_param("title", "Nothing")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["games"], json!([]));
}

#[tokio::test]
async fn test_lookup_reports_mode_fallback() {
    let server = create_test_server(vec![celeste()]);
    let response = server
        .get("/api/v1/games/lookup")
        .add_query_param("title", "Celeste")
        .add_query_param("search_type", "fuzzy")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["warning"].as_str().unwrap().contains("fuzzy"));
    assert_eq!(body["games"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_lookup_rejects_empty_title() {
    let server = create_test_server(vec![]);
    let response = server
        .get("/api/v1/games/lookup")
        .add_query_param("title", "  ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lookup_malformed_record_is_bad_gateway() {
    let server = create_test_server(vec![json!({"id": 1, "name": "Celeste"})]);
    let response = server
        .get("/api/v1/games/lookup")
        .add_query_param("title", "Celeste")
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_corpus_remap() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/corpus/remap")
        .json(&json!([{
            "id": 1,
            "name": "Celeste",
            "platforms": "PlayStation 4,Xbox One,UnknownPlat",
            "age_ratings": "CERO_B",
            "genres": "Platform,Indie,Horror"
        }]))
        .await;

    response.assert_status_ok();
    let rows: Vec<Value> = response.json();
    assert_eq!(rows[0]["platforms"], "PS4,XB1,UnknownPlat");
    assert_eq!(rows[0]["age_ratings"], "E10");
    assert_eq!(rows[0]["genres"], "Platformer,Indie");
}

#[tokio::test]
async fn test_corpus_remap_unknown_single_genre() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/corpus/remap")
        .json(&json!([{"id": 1, "name": "Silent Hill", "genres": "Horror"}]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corpus_companies() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/corpus/companies")
        .json(&json!({
            "rows": [
                {"id": 1, "name": "A", "involved_companies": "Nintendo EAD,Nintendo"},
                {"id": 2, "name": "B", "involved_companies": "nintendo"},
                {"id": 3, "name": "C"}
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["unique"], json!(["Nintendo EAD", "Nintendo", "nintendo"]));
    assert_eq!(body["counts"]["nintendo"], 2);
}

#[tokio::test]
async fn test_corpus_companies_unknown_column() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/corpus/companies")
        .json(&json!({"rows": [], "column": "companies"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corpus_subsidiaries() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/corpus/subsidiaries")
        .json(&json!({
            "rows": [
                {"id": 1, "name": "A", "involved_companies": "Ubisoft Montreal"},
                {"id": 2, "name": "B", "involved_companies": "Ubisoft"}
            ],
            "parent": "Ubisoft"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!(["Ubisoft Montreal"]));
}

#[tokio::test]
async fn test_recommend_by_scores() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({"scores": [10.0, 12.0, 9.0, 50.0], "target": 0, "n": 2}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["indices"], json!([2, 1]));
}

#[tokio::test]
async fn test_recommend_by_matrix() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "similarity_matrix": [[1.0, 0.2, 0.9], [0.2, 1.0, 0.1], [0.9, 0.1, 1.0]],
            "target": 0
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["indices"], json!([2, 1]));
}

#[tokio::test]
async fn test_recommend_rejects_out_of_bounds_target() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({"scores": [1.0, 2.0], "target": 2}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_rejects_ragged_matrix() {
    let server = create_test_server(vec![]);
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({"similarity_matrix": [[1.0, 0.5], [0.5]], "target": 0}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
