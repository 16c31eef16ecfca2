use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pinnacle_core::domain::report::{Report, SlotSignal};
use pinnacle_core::forecast::{error::ForecastError, generate_report};

const MARKDOWN: &str = "text/markdown; charset=utf-8";

const INTRO: &str = "# Profit Pinnacles - Intraday Nifty Trading & Sector Forecast\n\n\
This tool generates a simplified intraday forecast for the Nifty index.  \n\
It provides time-wise trading signals using Advanced Multiple Datasets and using AI for Computations.\n\
Enter a date (YYYY-MM-DD, IST) below to view the Report.\n\n\
`GET /forecast?date=YYYY-MM-DD`\n";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = pinnacle_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let app = router();

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port_or_default()));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/forecast", get(get_forecast_markdown))
        .route("/forecast/:date", get(get_forecast_json))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, MARKDOWN)], INTRO)
}

#[derive(Debug, Deserialize)]
struct ForecastQuery {
    date: Option<String>,
}

#[derive(Debug, Serialize)]
struct ApiForecast {
    date: NaiveDate,
    markdown: String,
    slots: Vec<SlotSignal>,
}

impl From<Report> for ApiForecast {
    fn from(report: Report) -> Self {
        Self {
            date: report.date,
            markdown: report.to_markdown(),
            slots: report.slots,
        }
    }
}

type ApiError = (StatusCode, String);

fn bad_request(err: ForecastError) -> ApiError {
    tracing::warn!(error = %err, "rejected forecast request");
    (StatusCode::BAD_REQUEST, err.user_message())
}

async fn get_forecast_markdown(
    Query(query): Query<ForecastQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let input = query.date.unwrap_or_default();
    let report = generate_report(&input).map_err(bad_request)?;

    tracing::info!(date = %report.date, "served markdown forecast");
    Ok(([(header::CONTENT_TYPE, MARKDOWN)], report.to_markdown()))
}

async fn get_forecast_json(Path(date): Path<String>) -> Result<Json<ApiForecast>, ApiError> {
    let report = generate_report(&date).map_err(bad_request)?;

    tracing::info!(date = %report.date, "served json forecast");
    Ok(Json(ApiForecast::from(report)))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &pinnacle_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
