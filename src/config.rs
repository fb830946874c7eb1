use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub startup: StartupConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Speedtest CSV written by the external logger; read on every request.
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
        }
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from("/app/log/ookla_speedtest_log.csv")
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartupConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Give up (and exit) if the log file is still missing or empty after this long.
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            wait_timeout_secs: default_wait_timeout_secs(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_wait_timeout_secs() -> u64 {
    300
}

impl StartupConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }
}

impl AppConfig {
    /// Loads `CONFIG_FILE`, or `config.toml` if present; defaults otherwise.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_file(Path::new(&path)),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_file(Path::new(DEFAULT_CONFIG_PATH))
            }
            Err(_) => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config '{}': {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.log.path.as_os_str().is_empty(),
            "log.path must be non-empty"
        );
        anyhow::ensure!(
            self.startup.poll_interval_ms > 0,
            "startup.poll_interval_ms must be > 0, got {}",
            self.startup.poll_interval_ms
        );
        anyhow::ensure!(
            self.startup.wait_timeout_secs > 0,
            "startup.wait_timeout_secs must be > 0, got {}",
            self.startup.wait_timeout_secs
        );
        anyhow::ensure!(
            self.startup.poll_interval() < self.startup.wait_timeout(),
            "startup.poll_interval_ms ({}) must be shorter than startup.wait_timeout_secs ({}s)",
            self.startup.poll_interval_ms,
            self.startup.wait_timeout_secs
        );
        Ok(())
    }
}
