use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str =
    "https://u9q3vta531.execute-api.ap-northeast-2.amazonaws.com/default";
const DEFAULT_LOGIN_PATH: &str = "/deepstation-login";
const DEFAULT_DAY_INFO_PATH: &str = "/dayinfo";
const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub login_path: String,
    pub day_info_path: String,
    pub environment: String,
    pub enable_logging: bool,
    pub session_ttl_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            day_info_path: DEFAULT_DAY_INFO_PATH.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from variables captured at compile time
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            login_path: option_env!("LOGIN_PATH")
                .unwrap_or(DEFAULT_LOGIN_PATH)
                .to_string(),
            day_info_path: option_env!("DAY_INFO_PATH")
                .unwrap_or(DEFAULT_DAY_INFO_PATH)
                .to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            session_ttl_minutes: option_env!("SESSION_TTL_MINUTES")
                .unwrap_or("60")
                .parse()
                .unwrap_or(DEFAULT_SESSION_TTL_MINUTES),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.login_path)
    }

    pub fn day_info_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.day_info_path)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Production builds never log, whatever `ENABLE_LOGGING` says
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging && !self.is_production()
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
