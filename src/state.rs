use crate::api::ApiClient;
use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared by every route: the outbound client used by the pages and the
/// bundled backend's store.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(api: ApiClient, data_path: PathBuf, data: AppData) -> Self {
        Self {
            api,
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
