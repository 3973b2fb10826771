use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One stored value as the backend returns it. `date` is absent for legacy rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StockResponse {
    #[serde(default)]
    pub stock: Vec<StockRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStockRequest {
    pub user_id: String,
    pub current_date_stock: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuery {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub password_hash: String,
}

/// Everything the bundled backend persists.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    /// Keyed by email.
    #[serde(default)]
    pub users: BTreeMap<String, UserRecord>,
    /// Keyed by user id, in insertion order.
    #[serde(default)]
    pub stocks: BTreeMap<String, Vec<StockRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct AddValueForm {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct DashboardQuery {
    pub view: Option<String>,
}
