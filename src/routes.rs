use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::inference::{
    batch_from_queries, batch_from_users, schema, PollRequest, RunOptions, UserProfile,
};
use crate::state::AppState;

const SINGLE_PROMPT: &str = "What's that song that goes 'all the single ladies'?";
const SENTENCES_PROMPT: &str =
    "Generate 10 common phrases that someone might ask to be translated";
const USERS_PROMPT: &str = "Generate 10 business users each with a profile status";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Direct and queued-batch runs
        .route("/example/single", get(example_single))
        .route("/example/batch", post(example_batch))
        .route("/example/batch/with-reference", post(example_batch_with_reference))
        // Helpers that generate example inputs
        .route("/generate/sentences", get(generate_sentences))
        .route("/generate/users", get(generate_users))
        // Poll a previously queued batch
        .route("/check-request", get(check_request))
}

#[derive(Debug, Deserialize)]
struct BatchQueriesPayload {
    queries: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BatchUsersPayload {
    users: Vec<UserProfile>,
}

#[derive(Debug, Deserialize)]
struct PollQuery {
    id: String,
    model: String,
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn example_single(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let response = state
        .inference
        .run(
            &state.config.inference_config.text_model,
            json!({ "prompt": SINGLE_PROMPT }),
            RunOptions::default(),
        )
        .await?;
    Ok(Json(json!({ "response": response })))
}

async fn example_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchQueriesPayload>,
) -> Result<Json<Value>, ApiError> {
    info!("Queueing translation batch of {} queries", payload.queries.len());
    let batch = batch_from_queries(&payload.queries);
    let response = state
        .inference
        .run(
            &state.config.inference_config.translation_model,
            serde_json::to_value(&batch)?,
            RunOptions::queued(),
        )
        .await?;
    Ok(Json(json!({ "response": response })))
}

async fn example_batch_with_reference(
    State(state): State<AppState>,
    Json(payload): Json<BatchUsersPayload>,
) -> Result<Json<Value>, ApiError> {
    // Each item carries the username as an external reference so the
    // caller can sync results back up to their users.
    info!("Queueing referenced batch of {} users", payload.users.len());
    let batch = batch_from_users(&payload.users);
    let response = state
        .inference
        .run(
            &state.config.inference_config.translation_model,
            serde_json::to_value(&batch)?,
            RunOptions::queued(),
        )
        .await?;
    Ok(Json(json!({ "response": response })))
}

async fn generate_sentences(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let results = state
        .inference
        .run(
            &state.config.inference_config.text_model,
            json!({
                "prompt": SENTENCES_PROMPT,
                "response_format": schema::sentences_response_format(),
            }),
            RunOptions::default(),
        )
        .await?;
    Ok(Json(results))
}

async fn generate_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let results = state
        .inference
        .run(
            &state.config.inference_config.text_model,
            json!({
                "prompt": USERS_PROMPT,
                "response_format": schema::users_response_format(),
            }),
            RunOptions::default(),
        )
        .await?;
    Ok(Json(results))
}

async fn check_request(
    State(state): State<AppState>,
    Query(query): Query<PollQuery>,
) -> Result<Json<Value>, ApiError> {
    if query.id.is_empty() || query.model.is_empty() {
        return Err(ApiError::BadRequest(
            "id and model query parameters are required".to_string(),
        ));
    }
    info!("Polling queued request {}", query.id);

    let poll = PollRequest {
        request_id: query.id,
    };
    let response = state
        .inference
        .run(&query.model, serde_json::to_value(&poll)?, RunOptions::default())
        .await?;
    Ok(Json(response))
}
