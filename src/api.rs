use crate::models::{AddStockRequest, LoginRequest, LoginResponse, StockRecord, StockResponse};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const GET_STOCK_PATH: &str = "/api/v1/get-stock";
pub const ADD_STOCK_PATH: &str = "/api/v1/add-stock";
pub const LOGIN_PATH: &str = "/api/v1/login";

/// Every failure mode the pages care about. They all end up on the same generic path.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Thin client for the stock backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_stock(&self, user_id: &str) -> Result<Vec<StockRecord>, ApiError> {
        let response = self
            .client
            .get(self.url(GET_STOCK_PATH))
            .query(&[("userId", user_id)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body: StockResponse = decode_ok(response).await?;
        Ok(body.stock)
    }

    pub async fn add_stock(&self, user_id: &str, value: i64) -> Result<Vec<StockRecord>, ApiError> {
        let request = AddStockRequest {
            user_id: user_id.to_string(),
            current_date_stock: value,
        };
        let response = self
            .client
            .post(self.url(ADD_STOCK_PATH))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body: StockResponse = decode_ok(response).await?;
        Ok(body.stock)
    }

    /// Returns the session identifier for valid credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body: LoginResponse = decode_ok(response).await?;
        Ok(body.user_id)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Only a 200 counts as success.
async fn decode_ok<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(ApiError::Status(status));
    }
    response.json::<T>().await.map_err(ApiError::Decode)
}
