use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing::Level;

/// Which console application is running. Decides the env prefix and the
/// default database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Attendance,
    Marks,
}

impl App {
    pub fn name(self) -> &'static str {
        match self {
            App::Attendance => "attendance",
            App::Marks => "marks",
        }
    }

    fn database_env_key(self) -> &'static str {
        match self {
            App::Attendance => "ATTENDANCE_DATABASE_URL",
            App::Marks => "MARKS_DATABASE_URL",
        }
    }

    fn default_database_url(self) -> String {
        format!("sqlite://{}.db", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: App,
    pub database_url: String,
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    /// Every setting is optional; an empty environment gives a working setup.
    pub fn from_env(app: App) -> Result<Self> {
        dotenv().ok();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            app,
            database_url: env::var(app.database_env_key())
                .unwrap_or_else(|_| app.default_database_url()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: Level::from_str(&log_level)
                .with_context(|| format!("LOG_LEVEL has an unknown value {log_level:?}"))?,
        })
    }

    pub fn log_file_name(&self) -> String {
        format!("{}.log", self.app.name())
    }
}
