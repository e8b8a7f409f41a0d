use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tracts::{LonLat, TractSet};
use viewer::{ClickOutcome, EngineOp, Legend, MapConfig};

#[derive(Clone)]
struct AppState {
    config: MapConfig,
    tracts: Arc<TractSet>,
    assets_root: PathBuf,
    data_root: PathBuf,
}

/// Click position as the page reports it, in the engine's lngLat naming.
#[derive(Debug, Deserialize)]
struct InspectRequest {
    lng: f64,
    lat: f64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let assets_root = PathBuf::from(
        env::var("VIEWER_ASSETS_ROOT")
            .unwrap_or_else(|_| "crates/apps/viewer_server/assets".to_string()),
    );
    let data_root = env::var("VIEWER_DATA_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| assets_root.join("data"));
    let addr: SocketAddr = env::var("VIEWER_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8600".to_string())
        .parse()
        .expect("invalid VIEWER_ADDR");

    let dataset_path = data_root.join("census-typologies.geojson");
    let tracts = match load_tracts(&dataset_path).await {
        Ok(tracts) => tracts,
        Err(err) => {
            error!("dataset load failed: {dataset_path:?} -> {err}");
            std::process::exit(1);
        }
    };
    info!(
        "loaded {} tracts from {dataset_path:?} ({} non-areal features skipped)",
        tracts.len(),
        tracts.skipped()
    );

    let state = AppState {
        config: MapConfig::default(),
        tracts: Arc::new(tracts),
        assets_root,
        data_root,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(get_index))
        .route("/app.js", get(get_app_js))
        .route("/site.css", get(get_site_css))
        .route("/data/census-typologies.geojson", get(get_dataset))
        .route("/api/config", get(get_config))
        .route("/api/style-ops", get(get_style_ops))
        .route("/api/legend", get(get_legend))
        .route("/api/legend.html", get(get_legend_html))
        .route("/api/inspect", post(post_inspect))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("typology viewer listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn load_tracts(path: &Path) -> Result<TractSet, String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("read failed: {e}"))?;
    TractSet::from_geojson_str(&text).map_err(|e| e.to_string())
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

async fn get_index(State(state): State<AppState>) -> Response {
    let path = state.assets_root.join("index.html");
    serve_file(&path, "text/html; charset=utf-8").await
}

async fn get_app_js(State(state): State<AppState>) -> Response {
    let path = state.assets_root.join("app.js");
    serve_file(&path, "text/javascript").await
}

async fn get_site_css(State(state): State<AppState>) -> Response {
    let path = state.assets_root.join("site.css");
    serve_file(&path, "text/css").await
}

async fn get_dataset(State(state): State<AppState>) -> Response {
    let path = state.data_root.join("census-typologies.geojson");
    serve_file(&path, "application/geo+json").await
}

async fn get_config(State(state): State<AppState>) -> Json<MapConfig> {
    Json(state.config.clone())
}

async fn get_style_ops() -> Json<Vec<EngineOp>> {
    Json(viewer::style_ops())
}

async fn get_legend() -> Json<Legend> {
    Json(Legend::built_from_catalog())
}

async fn get_legend_html() -> Html<String> {
    Html(Legend::built_from_catalog().to_html())
}

async fn post_inspect(
    State(state): State<AppState>,
    Json(request): Json<InspectRequest>,
) -> Json<ClickOutcome> {
    let point = LonLat::new(request.lng, request.lat);
    Json(viewer::inspect_at(&state.tracts, point))
}

async fn serve_file(path: &Path, content_type: &str) -> Response {
    match tokio::fs::read(path).await {
        Ok(data) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                http::header::CONTENT_TYPE,
                HeaderValue::from_str(content_type)
                    .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
            );
            (StatusCode::OK, headers, Body::from(data)).into_response()
        }
        Err(err) => {
            error!("file read failed: {path:?} -> {err}");
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
    }
}
