// src/config/mod.rs

use once_cell::sync::Lazy;
use std::str::FromStr;

/// Process-wide configuration, loaded once from the environment.
#[derive(Debug, Clone)]
pub struct HearthConfig {
    // ── OpenAI Configuration
    /// Absent key disables the AI schedule assistant entirely.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,

    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: u32,
    pub migrations_dir: String,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Tolerate trailing comments and whitespace in .env values
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

/// Read an optional env var, treating empty or whitespace-only values as absent.
fn env_var_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl HearthConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            openai_api_key: env_var_opt("OPENAI_API_KEY"),
            openai_base_url: env_var_or(
                "OPENAI_API_URL",
                "https://api.openai.com/v1".to_string(),
            ),
            database_url: env_var_or("DATABASE_URL", "sqlite:./hearth.db".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 10),
            migrations_dir: env_var_or("HEARTH_MIGRATIONS_DIR", "./migrations".to_string()),
            host: env_var_or("HEARTH_HOST", "0.0.0.0".to_string()),
            port: env_var_or("HEARTH_PORT", 8080),
            log_level: env_var_or("HEARTH_LOG_LEVEL", "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<HearthConfig> = Lazy::new(HearthConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_or_parses_and_defaults() {
        unsafe {
            std::env::set_var("HEARTH_TEST_PORT", "9090");
            std::env::set_var("HEARTH_TEST_BAD", "not-a-number");
        }
        assert_eq!(env_var_or("HEARTH_TEST_PORT", 8080u16), 9090);
        assert_eq!(env_var_or("HEARTH_TEST_BAD", 8080u16), 8080);
        assert_eq!(env_var_or("HEARTH_TEST_MISSING", 8080u16), 8080);
    }

    #[test]
    fn blank_api_key_counts_as_absent() {
        unsafe {
            std::env::set_var("HEARTH_TEST_KEY", "   ");
        }
        assert_eq!(env_var_opt("HEARTH_TEST_KEY"), None);
    }
}
