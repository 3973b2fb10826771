use crate::api::{ADD_STOCK_PATH, GET_STOCK_PATH, LOGIN_PATH};
use crate::state::AppState;
use crate::{backend, handlers};
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(handlers::DASHBOARD_ROUTE, get(handlers::dashboard))
        .route("/dashboard/add", post(handlers::add_value))
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/signup", get(handlers::signup_page).post(handlers::signup))
        .route("/logout", get(handlers::logout).post(handlers::logout))
        .route(GET_STOCK_PATH, get(backend::get_stock))
        .route(ADD_STOCK_PATH, post(backend::add_stock))
        .route(LOGIN_PATH, post(backend::login))
        .with_state(state)
}
