//! Data flow behind the dashboard page, kept free of HTTP response concerns so the
//! handlers only decide where to navigate.

use crate::api::{ApiClient, ApiError};
use crate::series::{parse_input, InputError, Series};
use crate::session::Session;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Fetches and normalizes the signed-in user's series.
pub async fn load_series(api: &ApiClient, session: &Session) -> Result<Series, ApiError> {
    let records = api.get_stock(&session.user_id).await?;
    Ok(Series::from_records(&records))
}

/// Parses `raw`, submits it, and returns the series built from the backend's answer.
/// Invalid input returns before any request is made.
pub async fn submit_value(
    api: &ApiClient,
    session: &Session,
    raw: &str,
) -> Result<Series, SubmitError> {
    let value = parse_input(raw)?;
    let records = api.add_stock(&session.user_id, value).await?;
    let mut series = Series::new();
    series.apply_add_response(&records);
    Ok(series)
}
