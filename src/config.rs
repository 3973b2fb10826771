use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/state.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Backend base URL. `None` means same-origin: the bundled backend of this process.
    pub api_url: Option<String>,
    pub data_path: PathBuf,
    pub demo_user: Option<DemoUser>,
}

/// Account seeded into the bundled backend at startup, from `APP_DEMO_USER=email:password`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoUser {
    pub email: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            api_url: env::var("API_URL").ok().and_then(non_empty_url),
            data_path: env::var("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
            demo_user: env::var("APP_DEMO_USER")
                .ok()
                .and_then(|value| DemoUser::parse(&value)),
        }
    }

    /// Base URL the page handlers use to reach the backend.
    pub fn api_base(&self) -> String {
        match &self.api_url {
            Some(url) => url.clone(),
            None => format!("http://127.0.0.1:{}", self.port),
        }
    }
}

impl DemoUser {
    pub fn parse(raw: &str) -> Option<Self> {
        let (email, password) = raw.split_once(':')?;
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

fn non_empty_url(value: String) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
