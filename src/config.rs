use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_FUNDS_FILE: &str = "blackrock_fr.csv";
const DEFAULT_STOCKS_FILE: &str = "individual_positions.csv";
const DEFAULT_COOKIE_MAX_AGE_DAYS: i64 = 1;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub funds_file: String,
    pub stocks_file: String,
    pub cookie_max_age_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            funds_file: DEFAULT_FUNDS_FILE.to_string(),
            stocks_file: DEFAULT_STOCKS_FILE.to_string(),
            cookie_max_age_days: DEFAULT_COOKIE_MAX_AGE_DAYS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            funds_file: std::env::var("FUNDS_FILE")
                .unwrap_or_else(|_| DEFAULT_FUNDS_FILE.to_string()),
            stocks_file: std::env::var("STOCKS_FILE")
                .unwrap_or_else(|_| DEFAULT_STOCKS_FILE.to_string()),
            cookie_max_age_days: std::env::var("COOKIE_MAX_AGE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COOKIE_MAX_AGE_DAYS),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        if self.cookie_max_age_days <= 0 {
            return Err(format!(
                "COOKIE_MAX_AGE_DAYS must be positive, got {}",
                self.cookie_max_age_days
            ));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_addr
            .parse()
            .map_err(|e| format!("Invalid BIND_ADDR '{}': {}", self.bind_addr, e))
    }

    pub fn funds_path(&self) -> PathBuf {
        self.data_dir.join(&self.funds_file)
    }

    pub fn stocks_path(&self) -> PathBuf {
        self.data_dir.join(&self.stocks_file)
    }
}
