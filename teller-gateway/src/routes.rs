//! Axum route handlers for the Teller account API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use teller_core::{AccountId, NewAccount};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};

use crate::{error::GatewayError, probe::DatabaseProbe, store::AccountStore};

// ── Shared state ─────────────────────────────────────────────────────────────

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AccountStore>,
    pub probe: Arc<dyn DatabaseProbe>,
}

impl AppState {
    pub fn new(store: Arc<AccountStore>, probe: Arc<dyn DatabaseProbe>) -> Self {
        Self { store, probe }
    }
}

// ── Request / response types ──────────────────────────────────────────────────

/// Body of `POST /accounts`.
///
/// Both fields may be omitted; a missing name fails validation and a missing
/// balance opens the account at zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub initial_balance: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbHealth {
    pub can_connect: bool,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/{id}", get(get_account))
        .route("/health", get(health))
        .route("/health/db", get(db_health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /health/db` — report whether the database answers.
pub async fn db_health(State(state): State<AppState>) -> Json<DbHealth> {
    Json(DbHealth { can_connect: state.probe.can_connect().await })
}

/// `GET /accounts` — every account in creation order.
pub async fn list_accounts(State(state): State<AppState>) -> impl IntoResponse {
    let accounts = state.store.list();
    debug!(count = accounts.len(), "listing accounts");
    Json(accounts)
}

/// `GET /accounts/{id}` — a single account.
///
/// Any segment that is not an issued id, including negative, zero,
/// non-numeric and out-of-range values, is a miss.
///
/// # Errors
/// Returns [`GatewayError::AccountNotFound`] if no account has that id.
pub async fn get_account(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let account = raw
        .parse::<u64>()
        .ok()
        .and_then(|value| AccountId::new(value).ok())
        .and_then(|id| state.store.get(id))
        .ok_or_else(|| GatewayError::AccountNotFound(raw))?;
    Ok(Json(account))
}

/// `POST /accounts` — open a new account.
///
/// Responds `201 Created` with a `Location` header pointing at the new account.
///
/// # Errors
/// Returns [`GatewayError::Core`] if the name is blank or the opening balance
/// is negative; nothing is stored in that case.
pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountBody>,
) -> Result<impl IntoResponse, GatewayError> {
    let new = NewAccount::new(body.name.unwrap_or_default(), body.initial_balance)
        .inspect_err(|e| warn!(error = %e, "rejected account creation"))?;
    let account = state.store.create(new)?;
    let location = format!("/accounts/{}", account.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(account)))
}
