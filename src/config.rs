//! Environment detection for runtime configuration.

use std::env;

/// Resolve the runtime environment name.
///
/// Reads `SIGNATRIX_ENV`, falling back to `ENVIRONMENT`, defaulting to
/// `development`. A `.env` file is honored when present.
pub fn get_environment() -> String {
    dotenvy::dotenv().ok();
    env::var("SIGNATRIX_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "development".to_string())
}
