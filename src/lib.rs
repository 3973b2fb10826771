pub mod api;
pub mod app;
pub mod auth;
pub mod backend;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod series;
pub mod session;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use api::ApiClient;
pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_data, persist_data, seed_user};
