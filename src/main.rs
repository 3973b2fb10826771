use chart_builder::{load_data, persist_data, router, seed_user, ApiClient, AppState, Config};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut data = load_data(&config.data_path).await;
    if let Some(user) = &config.demo_user {
        seed_user(&mut data, user).map_err(|err| err.message)?;
        persist_data(&config.data_path, &data)
            .await
            .map_err(|err| err.message)?;
    }

    let api = ApiClient::new(config.api_base());
    info!(api = %api.base_url(), data = %config.data_path.display(), "backend configured");
    let state = AppState::new(api, config.data_path.clone(), data);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
