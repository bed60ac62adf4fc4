use crate::application::retry::RetryPolicy;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub retry: RetrySettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Unset means a request may hang indefinitely
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrySettings {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    #[serde(default = "default_refresh_interval_ms")]
    pub interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RenderSettings {
    /// Escape backend-provided text before interpolating it into markup
    #[serde(default)]
    pub escape_text: bool,
}

fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    5000
}

fn default_refresh_interval_ms() -> u64 {
    30_000
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: None,
        }
    }
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            delay_ms: default_retry_delay_ms(),
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_refresh_interval_ms(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl DashboardConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.retry.max_retries,
            delay: Duration::from_millis(self.retry.delay_ms),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh.interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.request_timeout_ms.map(Duration::from_millis)
    }
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` variables
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_config(config::File::with_name(CONFIG_FILE).required(false), None)
}

fn build_config<S>(
    file: S,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<DashboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .source(env),
        )
        .build()?;

    let config: DashboardConfig = settings.try_deserialize()?;
    anyhow::ensure!(
        config.refresh.interval_ms > 0,
        "refresh.interval_ms must be greater than zero"
    );

    Ok(config)
}
