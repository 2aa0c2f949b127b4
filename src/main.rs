use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{DateTime, Local};
use clap::{ArgGroup, Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use persona::assessment::domain::Dimension;
use persona::assessment::{
    AnswerSheetImporter, QuestionCatalog, ScoringEngine, TypeDescription, TypeProfile,
};
use persona::config::AppConfig;
use persona::error::AppError;
use persona::telemetry;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Persona Assessment Service",
    about = "Serve and score MBTI-style questionnaires from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answer sheet against the standard questionnaire
    Assess {
        #[command(subcommand)]
        command: AssessCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum AssessCommand {
    /// Score a completed answer sheet and print the resulting type
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
#[command(group = ArgGroup::new("sheet").required(true))]
struct ScoreArgs {
    /// Comma-separated Likert responses in question order (1=agree .. 5=disagree)
    #[arg(long, group = "sheet", value_parser = parse_answer_list)]
    answers: Option<AnswerList>,
    /// CSV answer sheet with question_id,answer rows
    #[arg(long, group = "sheet")]
    answers_csv: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct AnswerList(Vec<u8>);

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    answers: Vec<u8>,
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    code: String,
    name: &'static str,
    blurb: &'static str,
    scored_at: DateTime<Local>,
    tallies: Vec<TallyView>,
}

#[derive(Debug, Serialize)]
struct TallyView {
    dimension: Dimension,
    dimension_label: &'static str,
    first_letter: char,
    first: u16,
    second_letter: char,
    second: u16,
    winner: char,
}

#[derive(Debug, Serialize)]
struct QuestionsResponse {
    total: usize,
    questions: Vec<QuestionView>,
}

#[derive(Debug, Serialize)]
struct QuestionView {
    id: u16,
    dimension: Dimension,
    dimension_label: &'static str,
    text: &'static str,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess {
            command: AssessCommand::Score(args),
        } => run_score(args),
    }
}

fn parse_answer_list(raw: &str) -> Result<AnswerList, String> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|err| format!("failed to parse '{}' as a 1-5 response ({err})", part))
        })
        .collect::<Result<Vec<u8>, String>>()?;
    Ok(AnswerList(values))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.listen.host = host;
    }
    if let Some(port) = args.port.take() {
        config.listen.port = port;
    }

    telemetry::init(&config.log)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/questions", get(questions_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.listen.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        answers_csv,
    } = args;

    let catalog = QuestionCatalog::standard();
    let answers = match (answers, answers_csv) {
        (Some(AnswerList(values)), _) => values,
        (None, Some(path)) => AnswerSheetImporter::from_path(path, &catalog)?,
        // clap's "sheet" argument group rejects the command before this point
        (None, None) => unreachable!("one answer source is required"),
    };

    let engine = ScoringEngine::new(catalog);
    let profile = engine.score(&answers)?;
    render_profile(&profile);
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn questions_endpoint() -> Json<QuestionsResponse> {
    let catalog = QuestionCatalog::standard();
    let questions = catalog
        .questions()
        .iter()
        .map(|question| QuestionView {
            id: question.id,
            dimension: question.dimension,
            dimension_label: question.dimension.label(),
            text: question.text,
        })
        .collect::<Vec<_>>();

    Json(QuestionsResponse {
        total: questions.len(),
        questions,
    })
}

async fn score_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let engine = ScoringEngine::new(QuestionCatalog::standard());
    let profile = engine.score(&payload.answers)?;
    let description = TypeDescription::for_type(&profile.personality);

    Ok(Json(ScoreResponse {
        code: profile.code(),
        name: description.name,
        blurb: description.blurb,
        scored_at: Local::now(),
        tallies: tally_views(&profile),
    }))
}

fn tally_views(profile: &TypeProfile) -> Vec<TallyView> {
    profile
        .tallies
        .iter()
        .map(|tally| TallyView {
            dimension: tally.dimension,
            dimension_label: tally.dimension.label(),
            first_letter: tally.dimension.first().glyph(),
            first: tally.first,
            second_letter: tally.dimension.second().glyph(),
            second: tally.second,
            winner: tally.winner.glyph(),
        })
        .collect()
}

fn render_profile(profile: &TypeProfile) {
    let description = TypeDescription::for_type(&profile.personality);

    println!("Personality type: {} ({})", profile.code(), description.name);
    println!("{}", description.blurb);

    println!("\nAxis tallies");
    for tally in &profile.tallies {
        println!(
            "- {}: {} {} vs {} {} -> {}",
            tally.dimension.label(),
            tally.dimension.first().glyph(),
            tally.first,
            tally.dimension.second().glyph(),
            tally.second,
            tally.winner.glyph()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn questions_endpoint_serves_full_catalog() {
        let Json(body) = questions_endpoint().await;

        assert_eq!(body.total, 60);
        assert_eq!(body.questions.len(), 60);
        assert_eq!(body.questions[0].id, 1);
        assert!(body.questions[0].text.len() > 10);
    }

    #[tokio::test]
    async fn score_endpoint_resolves_neutral_sheet_to_estj() {
        let request = ScoreRequest { answers: vec![3; 60] };

        let Json(body) = score_endpoint(Json(request))
            .await
            .expect("neutral sheet scores");

        assert_eq!(body.code, "ESTJ");
        assert_eq!(body.name, "Executive");
        assert_eq!(body.tallies.len(), 4);
        assert!(body.tallies.iter().all(|tally| tally.first == 0));
    }

    #[tokio::test]
    async fn score_endpoint_rejects_short_sheet() {
        let request = ScoreRequest { answers: vec![3; 10] };

        let error = score_endpoint(Json(request))
            .await
            .expect_err("short sheet rejected");

        assert!(matches!(error, AppError::Scoring(_)));
    }

    #[tokio::test]
    async fn score_route_accepts_json_payloads() {
        use tower::ServiceExt;

        let app = Router::new().route("/api/v1/assessment/score", post(score_endpoint));
        let payload = serde_json::to_vec(&json!({ "answers": vec![3u8; 60] }))
            .expect("payload serializes");

        let response = app
            .oneshot(
                axum::http::Request::post("/api/v1/assessment/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(payload))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body.get("code"), Some(&json!("ESTJ")));
    }

    #[tokio::test]
    async fn score_route_returns_bad_request_for_short_sheet() {
        use tower::ServiceExt;

        let app = Router::new().route("/api/v1/assessment/score", post(score_endpoint));
        let payload = serde_json::to_vec(&json!({ "answers": vec![3u8; 10] }))
            .expect("payload serializes");

        let response = app
            .oneshot(
                axum::http::Request::post("/api/v1/assessment/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(payload))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        let message = body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .expect("error message present");
        assert!(message.contains("10 responses"));
    }

    #[test]
    fn score_command_requires_exactly_one_answer_source() {
        assert!(Cli::try_parse_from(["persona", "assess", "score"]).is_err());
        assert!(Cli::try_parse_from(["persona", "assess", "score", "--answers", "1,2,3"]).is_ok());
        assert!(Cli::try_parse_from([
            "persona",
            "assess",
            "score",
            "--answers",
            "1,2,3",
            "--answers-csv",
            "sheet.csv",
        ])
        .is_err());
    }

    #[test]
    fn answer_list_parser_handles_spacing_and_rejects_garbage() {
        let AnswerList(values) = parse_answer_list("1, 2,3 ,4").expect("list parses");
        assert_eq!(values, vec![1, 2, 3, 4]);

        assert!(parse_answer_list("1,two,3").is_err());
    }
}
