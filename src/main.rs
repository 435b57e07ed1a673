use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};

use dubbing_core::constants::DEFAULT_LINES_PER_CHUNK;
use dubbing_core::{
    FinalRecord, PromptBlock, RoleNames, Row, Run, ScriptConfig, ScriptError, ScriptService,
    chunk_lines,
};

/// Application state shared across REST API handlers
#[derive(Clone)]
struct AppState {
    service: Arc<ScriptService>,
}

type ApiError = (StatusCode, String);

#[derive(serde::Serialize, serde::Deserialize, ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

/// One script row; blank speakers are spoken by the narrator
#[derive(serde::Deserialize, ToSchema)]
struct RowReq {
    #[serde(default)]
    speaker: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl From<RowReq> for Row {
    fn from(req: RowReq) -> Self {
        Row {
            speaker: req.speaker,
            text: req.text,
        }
    }
}

#[derive(serde::Deserialize, ToSchema)]
struct SplitReq {
    rows: Vec<RowReq>,
}

#[derive(serde::Serialize, ToSchema)]
struct RunRes {
    shot_id: u32,
    speaker: String,
    text: String,
}

impl From<&Run> for RunRes {
    fn from(run: &Run) -> Self {
        Self {
            shot_id: run.shot_id.get(),
            speaker: run.speaker.clone(),
            text: run.text.to_string(),
        }
    }
}

#[derive(serde::Serialize, ToSchema)]
struct SplitRes {
    shot_count: usize,
    run_count: usize,
    runs: Vec<RunRes>,
}

#[derive(serde::Deserialize, ToSchema)]
struct MergeReq {
    rows: Vec<RowReq>,
    /// Image prompts, one line per shot
    #[serde(default)]
    image_prompts: String,
    /// Video prompts, one line per shot
    #[serde(default)]
    video_prompts: String,
    /// Character names, comma-separated
    #[serde(default)]
    roles: String,
}

#[derive(serde::Serialize, ToSchema)]
struct RecordRes {
    shot_id: String,
    speaker: String,
    text: String,
    scene: String,
    matched_roles: String,
    image_prompt: String,
    video_prompt: String,
    emotion: String,
    intensity: String,
}

impl From<FinalRecord> for RecordRes {
    fn from(r: FinalRecord) -> Self {
        Self {
            shot_id: r.shot_id,
            speaker: r.speaker,
            text: r.text,
            scene: r.scene,
            matched_roles: r.matched_roles,
            image_prompt: r.image_prompt,
            video_prompt: r.video_prompt,
            emotion: r.emotion,
            intensity: r.intensity,
        }
    }
}

#[derive(serde::Serialize, ToSchema)]
struct MergeRes {
    records: Vec<RecordRes>,
}

#[derive(serde::Deserialize, ToSchema)]
struct ChunkReq {
    text: String,
    #[serde(default)]
    lines_per_chunk: Option<usize>,
}

#[derive(serde::Serialize, ToSchema)]
struct ChunkItem {
    index: usize,
    total: usize,
    text: String,
}

#[derive(serde::Serialize, ToSchema)]
struct ChunkRes {
    chunks: Vec<ChunkItem>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, split, merge, chunk),
    components(schemas(
        HealthRes, RowReq, SplitReq, SplitRes, RunRes, MergeReq, MergeRes, RecordRes, ChunkReq,
        ChunkRes, ChunkItem
    ))
)]
struct ApiDoc;

/// Main entry point for the dubbing REST adapter
///
/// # Environment Variables
/// - `DUBBING_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `DUBBING_NARRATOR`: Speaker for rows without one (default: "旁白")
/// - `DUBBING_SPEAKER_COLUMN` / `DUBBING_TEXT_COLUMN`: 0-based script columns (default: 1 / 7)
///
/// # Errors
/// Returns an error if the configuration is invalid, the address cannot be bound, or the
/// server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dubbing_run=info".parse()?)
                .add_directive("dubbing_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ScriptConfig::from_env_values(
        std::env::var("DUBBING_NARRATOR").ok(),
        std::env::var("DUBBING_SPEAKER_COLUMN").ok(),
        std::env::var("DUBBING_TEXT_COLUMN").ok(),
    )?;
    let addr = std::env::var("DUBBING_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting dubbing REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(config)).await?;

    Ok(())
}

fn app(config: ScriptConfig) -> Router {
    let state = AppState {
        service: Arc::new(ScriptService::new(config)),
    };

    Router::new()
        .route("/health", get(health))
        .route("/split", post(split))
        .route("/merge", post(merge))
        .route("/chunk", post(chunk))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn error_response(e: ScriptError) -> ApiError {
    let status = match e {
        ScriptError::NoShots | ScriptError::NoRecords => StatusCode::UNPROCESSABLE_ENTITY,
        ScriptError::InvalidInput(_) => StatusCode::BAD_REQUEST,
    };
    tracing::warn!("request rejected: {}", e);
    (status, e.to_string())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "dubbing REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/split",
    request_body = SplitReq,
    responses(
        (status = 200, description = "Shots split into speaker runs", body = SplitRes)
    )
)]
/// Split script rows into shots and speaker runs
async fn split(State(state): State<AppState>, Json(req): Json<SplitReq>) -> Json<SplitRes> {
    let rows: Vec<Row> = req.rows.into_iter().map(Row::from).collect();
    let breakdown = state.service.split(&rows);

    Json(SplitRes {
        shot_count: breakdown.shot_count(),
        run_count: breakdown.run_count(),
        runs: breakdown.runs().iter().map(RunRes::from).collect(),
    })
}

#[utoipa::path(
    post,
    path = "/merge",
    request_body = MergeReq,
    responses(
        (status = 200, description = "Shot list records", body = MergeRes),
        (status = 422, description = "Script produced no shots")
    )
)]
/// Split script rows and join them with prompts and matched roles
///
/// # Errors
/// Returns `422 Unprocessable Entity` if the rows contain no text to split.
async fn merge(
    State(state): State<AppState>,
    Json(req): Json<MergeReq>,
) -> Result<Json<MergeRes>, ApiError> {
    let rows: Vec<Row> = req.rows.into_iter().map(Row::from).collect();
    let breakdown = state.service.split(&rows);

    let records = state
        .service
        .merge(
            &breakdown,
            &PromptBlock::from_text(&req.image_prompts),
            &PromptBlock::from_text(&req.video_prompts),
            &RoleNames::parse(&req.roles),
        )
        .map_err(error_response)?;

    Ok(Json(MergeRes {
        records: records.into_iter().map(RecordRes::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/chunk",
    request_body = ChunkReq,
    responses(
        (status = 200, description = "Delimited text chunks", body = ChunkRes),
        (status = 400, description = "Chunk size out of range")
    )
)]
/// Append 。 to every line and cut the text into chunks
async fn chunk(
    State(_state): State<AppState>,
    Json(req): Json<ChunkReq>,
) -> Result<Json<ChunkRes>, ApiError> {
    let lines = req.lines_per_chunk.unwrap_or(DEFAULT_LINES_PER_CHUNK);
    let chunks = chunk_lines(&req.text, lines).map_err(error_response)?;

    Ok(Json(ChunkRes {
        chunks: chunks
            .into_iter()
            .map(|c| ChunkItem {
                index: c.index,
                total: c.total,
                text: c.text,
            })
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            service: Arc::new(ScriptService::default()),
        }
    }

    fn row(speaker: Option<&str>, text: &str) -> RowReq {
        RowReq {
            speaker: speaker.map(str::to_string),
            text: Some(text.to_string()),
        }
    }

    #[tokio::test]
    async fn test_health_payload() {
        let Json(res) = health(State(state())).await;
        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["ok"], serde_json::Value::Bool(true));
    }

    #[tokio::test]
    async fn test_split_returns_runs() {
        let req = SplitReq {
            rows: vec![row(Some("苏晚"), "你好^"), row(None, "今天天气不错^")],
        };
        let Json(res) = split(State(state()), Json(req)).await;

        assert_eq!(res.shot_count, 2);
        assert_eq!(res.run_count, 2);
        assert_eq!(res.runs[1].shot_id, 2);
        assert_eq!(res.runs[1].speaker, "旁白");
        assert_eq!(res.runs[1].text, "今天天气不错");
    }

    #[tokio::test]
    async fn test_merge_aligns_prompts() {
        let req = MergeReq {
            rows: vec![row(Some("苏晚"), "你好^"), row(None, "今天天气不错^")],
            image_prompts: "a\nb".into(),
            video_prompts: "x".into(),
            roles: "苏晚".into(),
        };
        let Json(res) = merge(State(state()), Json(req)).await.unwrap();

        assert_eq!(res.records.len(), 2);
        assert_eq!(res.records[1].image_prompt, "b");
        assert_eq!(res.records[1].video_prompt, "");
        assert_eq!(res.records[1].matched_roles, "");
    }

    #[tokio::test]
    async fn test_merge_without_text_is_unprocessable() {
        let req = MergeReq {
            rows: vec![row(Some("苏晚"), "")],
            image_prompts: String::new(),
            video_prompts: String::new(),
            roles: String::new(),
        };
        let err = merge(State(state()), Json(req)).await.err().unwrap();
        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_chunk_rejects_zero() {
        let req = ChunkReq {
            text: "a\nb".into(),
            lines_per_chunk: Some(0),
        };
        let err = chunk(State(state()), Json(req)).await.err().unwrap();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/split"));
        assert!(doc.paths.paths.contains_key("/merge"));
    }
}
