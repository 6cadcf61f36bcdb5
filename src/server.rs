//! HTTP server: routes, handlers and error responses.

use crate::availability::{check_availability, AvailabilityError, DateRange, DATE_FORMAT};
use crate::config::Config;
use crate::controller::PageController;
use crate::i18n::{
    I18nError, Language, MetricsReport, MissingTranslationPolicy, TranslationKey,
    TranslationMetrics, TranslationValue,
};
use crate::render::{render_error_page, render_page};
use crate::session::{Session, SessionParams};
use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub controller: Arc<PageController>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let controller = PageController::new(&config);
        Self {
            config: Arc::new(config),
            controller: Arc::new(controller),
        }
    }
}

/// Errors returned by the JSON endpoints.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Translation(#[from] I18nError),

    #[error(transparent)]
    Availability(#[from] AvailabilityError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Translation(I18nError::UnknownLanguage(_))
            | AppError::Translation(I18nError::DisabledLanguage(_)) => StatusCode::NOT_FOUND,
            AppError::Translation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Availability(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/translations/:lang", get(translations))
        .route("/api/availability", get(availability))
        .route("/api/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "Listening on {} (default language '{}', missing translations: {}, reversed ranges: {})",
        addr,
        config.default_language,
        config.missing_translation_policy,
        config.date_range_policy
    );

    axum::serve(listener, router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// ==================== Handlers ====================

async fn index(State(state): State<AppState>, Query(params): Query<SessionParams>) -> Response {
    let session = Session::from_params(params, state.config.default_language);
    let today = Local::now().date_naive();

    match state.controller.render(&session, today) {
        Ok(view) => Html(render_page(&view, &session)).into_response(),
        Err(err) => {
            error!(
                "Failed to render '{}' in '{}': {}",
                session.page, session.language, err
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error_page(&err, &session)),
            )
                .into_response()
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize)]
struct TranslationsResponse {
    language: &'static str,
    policy: MissingTranslationPolicy,
    fallback: &'static str,
    entries: BTreeMap<&'static str, TranslationValue>,
    missing: Vec<&'static str>,
}

async fn translations(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<TranslationsResponse>, AppError> {
    let language = Language::from_code(&code)?;
    let store = state.controller.store();
    let (resolved, missing) = store.resolve_all(language);

    Ok(Json(TranslationsResponse {
        language: language.code(),
        policy: store.policy(),
        fallback: store.fallback_language().code(),
        entries: resolved
            .into_iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect(),
        missing: missing.iter().map(TranslationKey::as_str).collect(),
    }))
}

#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    start: NaiveDate,
    end: NaiveDate,
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
struct AvailabilityResponse {
    available: bool,
    start: NaiveDate,
    end: NaiveDate,
    message: String,
    warning: Option<String>,
}

async fn availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let language = match query.lang.as_deref() {
        Some(code) => Language::from_code(code)?,
        None => state.config.default_language,
    };

    let outcome = check_availability(
        DateRange::new(query.start, query.end),
        state.config.date_range_policy,
    )?;

    let start = outcome.range.start.format(DATE_FORMAT).to_string();
    let end = outcome.range.end.format(DATE_FORMAT).to_string();
    let args = [("start", start.as_str()), ("end", end.as_str())];
    let store = state.controller.store();

    let warning = if outcome.reversed {
        Some(store.format(language, TranslationKey::AvailabilityRangeWarning, &args)?)
    } else {
        None
    };

    Ok(Json(AvailabilityResponse {
        available: outcome.available,
        start: outcome.range.start,
        end: outcome.range.end,
        message: store.format(language, TranslationKey::AvailabilitySuccess, &args)?,
        warning,
    }))
}

async fn metrics() -> Json<MetricsReport> {
    Json(TranslationMetrics::global().report())
}
