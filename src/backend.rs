//! Reference implementation of the stock endpoints, served by the same process so the
//! app works out of the box when no external `API_URL` is configured.

use crate::errors::AppError;
use crate::models::{
    AddStockRequest, LoginRequest, LoginResponse, StockQuery, StockRecord, StockResponse,
};
use crate::series::MAX_EXACT_VALUE;
use crate::state::AppState;
use crate::storage::{persist_data, verify_password};
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

pub async fn get_stock(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Result<Json<StockResponse>, AppError> {
    let user_id = query.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::bad_request("userId is required"));
    }

    let data = state.data.lock().await;
    let stock = data.stocks.get(user_id).cloned().unwrap_or_default();
    Ok(Json(StockResponse { stock }))
}

pub async fn add_stock(
    State(state): State<AppState>,
    Json(payload): Json<AddStockRequest>,
) -> Result<Json<StockResponse>, AppError> {
    let user_id = payload.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::bad_request("userId is required"));
    }

    if payload.current_date_stock.unsigned_abs() > MAX_EXACT_VALUE as u64 {
        return Err(AppError::bad_request("currentDateStock is out of range"));
    }

    // The store only changes once the new contents are on disk.
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let stock = {
        let entries = next.stocks.entry(user_id.to_string()).or_default();
        entries.push(StockRecord {
            date: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            value: payload.current_date_stock as f64,
        });
        entries.clone()
    };

    persist_data(&state.data_path, &next).await?;
    *data = next;

    info!(user_id, value = payload.current_date_stock, total = stock.len(), "stock added");
    Ok(Json(StockResponse { stock }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state.data.lock().await.users.get(payload.email.trim()).cloned();
    let Some(user) = user else {
        warn!(email = %payload.email, "login for unknown email");
        return Err(AppError::unauthorized("invalid credentials"));
    };

    if !verify_password(&payload.password, &user.password_hash) {
        warn!(email = %payload.email, "login with wrong password");
        return Err(AppError::unauthorized("invalid credentials"));
    }

    Ok(Json(LoginResponse {
        user_id: user.user_id,
    }))
}
