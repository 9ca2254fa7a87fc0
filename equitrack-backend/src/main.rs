mod args;
mod error;
mod ingest;

use args::Args;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use error::ApiError;
use ingest::TransactionDraft;
use log::info;
use position_engine::sample::sample_transactions;
use position_engine::Engine;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

// App State. One lock serializes the whole engine surface: a reader can
// never observe the remove-before-add window inside a mutation.
#[derive(Clone)]
struct AppState {
    engine: Arc<Mutex<Engine>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("=== EquiTrack Backend Starting ===");

    // Seed a fresh process with the demo dataset, like the shipped service.
    let mut engine = Engine::new();
    let sample = sample_transactions();
    engine.apply_batch(&sample);
    info!("Sample data loaded with {} transactions", sample.len());

    let state = AppState {
        engine: Arc::new(Mutex::new(engine)),
    };

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/positions", get(get_positions))
        .route("/api/trades", get(get_trades))
        .route("/api/transactions", post(post_transaction))
        .route("/api/transactions/bulk", post(post_transactions_bulk))
        .route("/api/reset", post(reset))
        .route("/api/load-sample", post(load_sample))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    info!("EquiTrack Backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn get_positions(State(state): State<AppState>) -> impl IntoResponse {
    let engine = state.engine.lock().await;
    Json(engine.positions())
}

async fn get_trades(State(state): State<AppState>) -> impl IntoResponse {
    let engine = state.engine.lock().await;
    Json(engine.trades())
}

async fn post_transaction(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let draft: TransactionDraft =
        serde_json::from_value(body).map_err(|_| ApiError::MissingFields)?;
    let tx = draft.into_transaction().ok_or(ApiError::MissingFields)?;

    let mut engine = state.engine.lock().await;
    engine.apply(&tx);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Transaction processed successfully",
            "transaction": tx,
            "positions": engine.positions(),
        })),
    ))
}

async fn post_transactions_bulk(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let items = match body {
        serde_json::Value::Array(items) => items,
        _ => return Err(ApiError::NotAnArray),
    };

    // Validate the whole batch before the engine sees any of it.
    let mut transactions = Vec::with_capacity(items.len());
    for item in items {
        let draft: TransactionDraft =
            serde_json::from_value(item).map_err(|_| ApiError::MissingFieldsInBatch)?;
        let tx = draft
            .into_transaction()
            .ok_or(ApiError::MissingFieldsInBatch)?;
        transactions.push(tx);
    }

    let mut engine = state.engine.lock().await;
    engine.apply_batch(&transactions);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Transactions processed successfully",
            "positions": engine.positions(),
        })),
    ))
}

async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    let mut engine = state.engine.lock().await;
    engine.clear();
    Json(json!({ "message": "Data reset successfully" }))
}

async fn load_sample(State(state): State<AppState>) -> impl IntoResponse {
    let mut engine = state.engine.lock().await;
    engine.clear();
    engine.apply_batch(&sample_transactions());

    Json(json!({
        "message": "Sample data loaded successfully",
        "positions": engine.positions(),
    }))
}
