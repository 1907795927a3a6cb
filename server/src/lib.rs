use axum::{extract::{Query, State}, routing::get, Json, Router};
use search_core::{ranker, Document, SearchServer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    /// Defaults to, and is capped at, the server's configured `max_results`.
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    /// Matches before truncation to `k`.
    pub total_hits: usize,
    pub results: Vec<Document>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub max_results: usize,
}

pub type AppState = Arc<SearchServer>;

pub fn build_app(server: AppState) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/stats", get(stats_handler))
        .with_state(server)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn search_handler(State(server): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let max_results = server.config().max_results;
    let k = params.k.unwrap_or(max_results).clamp(1, max_results);

    let query = server.parse_query(&params.q);
    let mut results = server.find_all_documents(&query);
    let total_hits = results.len();
    ranker::sort_by_relevance(&mut results);
    results.truncate(k);

    let elapsed = start.elapsed();
    tracing::debug!(query = %params.q, total_hits, returned = results.len(), "search served");
    Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits, results })
}

pub async fn stats_handler(State(server): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        document_count: server.document_count(),
        vocabulary_size: server.vocabulary_size(),
        max_results: server.config().max_results,
    })
}
