use serde::Deserialize;
use std::time::Duration;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub host: String,
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub poll_interval_ms: u64,
    pub clock_interval_ms: u64,
    pub placeholder_image: String,
}

/// Runtime settings handed to the dashboard at mount
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub poll_interval: Duration,
    pub clock_interval: Duration,
    pub placeholder_image: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(1000),
            clock_interval: Duration::from_millis(1000),
            placeholder_image: "/bolts_plus_receipt.JPG".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn settings(&self) -> DashboardSettings {
        DashboardSettings {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            clock_interval: Duration::from_millis(self.clock_interval_ms),
            placeholder_image: self.placeholder_image.clone(),
        }
    }
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__SECTION__KEY` variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = default_builder()?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(env_source());

    finish(builder)
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn default_builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    let defaults = DashboardSettings::default();
    Ok(config::Config::builder()
        .set_default("backend.host", "http://localhost:5001")?
        .set_default("dashboard.poll_interval_ms", defaults.poll_interval.as_millis() as i64)?
        .set_default("dashboard.clock_interval_ms", defaults.clock_interval.as_millis() as i64)?
        .set_default("dashboard.placeholder_image", defaults.placeholder_image)?)
}

fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> anyhow::Result<AppConfig> {
    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    fn validate(&self) -> anyhow::Result<()> {
        if self.backend.host.trim().is_empty() {
            anyhow::bail!("backend.host must not be empty");
        }
        if self.dashboard.poll_interval_ms == 0 {
            anyhow::bail!("dashboard.poll_interval_ms must be greater than zero");
        }
        if self.dashboard.clock_interval_ms == 0 {
            anyhow::bail!("dashboard.clock_interval_ms must be greater than zero");
        }
        Ok(())
    }
}
