use crate::config::DemoUser;
use crate::errors::AppError;
use crate::models::{AppData, UserRecord};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::path::Path;
use tokio::fs;
use tracing::{error, info};
use uuid::Uuid;

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::internal(std::io::Error::other(err.to_string())))
}

/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(err) => {
            error!("stored password hash is malformed: {err}");
            false
        }
    }
}

/// Creates the demo account, or resets its password when it already exists.
/// Returns the account's user id.
pub fn seed_user(data: &mut AppData, user: &DemoUser) -> Result<String, AppError> {
    let password_hash = hash_password(&user.password)?;
    let record = data
        .users
        .entry(user.email.clone())
        .or_insert_with(|| UserRecord {
            user_id: Uuid::new_v4().to_string(),
            password_hash: String::new(),
        });
    record.password_hash = password_hash;
    info!(email = %user.email, user_id = %record.user_id, "seeded demo user");
    Ok(record.user_id.clone())
}
