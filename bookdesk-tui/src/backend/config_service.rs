//! 配置服务
//!
//! 配置文件位于 `<config_dir>/bookdesk/config.json`，
//! 环境变量 `BOOKDESK_API_URL` / `BOOKDESK_TIMEOUT_SECS` 优先于文件。

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bookdesk_gateway::{GatewayConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

/// 覆盖服务地址的环境变量
pub const ENV_API_URL: &str = "BOOKDESK_API_URL";
/// 覆盖请求超时（秒）的环境变量
pub const ENV_TIMEOUT_SECS: &str = "BOOKDESK_TIMEOUT_SECS";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// 转换为网关配置
    pub fn gateway_config(&self) -> GatewayConfig {
        let mut config = GatewayConfig::new(self.api_base_url.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs));
        config.connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        config
    }

    /// 应用环境变量覆盖，无法解析的值被忽略
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => log::warn!("Ignoring {ENV_TIMEOUT_SECS}={raw:?}: not a number"),
            }
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 使用平台配置目录
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join("bookdesk").join("config.json")),
        }
    }

    /// 使用指定文件
    #[cfg(test)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// 首次运行时写入默认配置，返回是否新建了文件
    pub fn ensure_file(&self) -> Result<bool> {
        match &self.path {
            Some(path) if !path.exists() => {
                self.save(&AppConfig::default())?;
                log::info!("Wrote default config to {}", path.display());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// 读取文件中的配置，不应用环境变量
    fn read_file(&self) -> AppConfig {
        let Some(path) = &self.path else {
            log::warn!("No config directory on this platform, using defaults");
            return AppConfig::default();
        };

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return AppConfig::default();
            }
            Err(e) => {
                log::warn!("Cannot read {}: {e}, using defaults", path.display());
                return AppConfig::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Malformed config {}: {e}, using defaults", path.display());
            AppConfig::default()
        })
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.read_file().with_overrides(|key| std::env::var(key).ok()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .context("no config directory on this platform")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bookdesk-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = LocalConfigService::with_path(temp_path("absent.json"));
        assert_eq!(service.read_file(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("saved.json");
        let service = LocalConfigService::with_path(&path);
        let config = AppConfig {
            api_base_url: "http://books.internal/api/books".to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
        };

        service.save(&config).unwrap();
        assert_eq!(service.read_file(), config);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn first_run_writes_defaults_once() {
        let path = temp_path("first-run.json");
        let _ = std::fs::remove_file(&path);
        let service = LocalConfigService::with_path(&path);

        assert!(service.ensure_file().unwrap());
        assert_eq!(service.read_file(), AppConfig::default());

        std::fs::write(&path, r#"{"requestTimeoutSecs":7}"#).unwrap();
        assert!(!service.ensure_file().unwrap());
        assert_eq!(service.read_file().request_timeout_secs, 7);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_path("partial.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"apiBaseUrl":"http://10.0.0.5:8080/api/books"}"#).unwrap();

        let config = LocalConfigService::with_path(&path).read_file();
        assert_eq!(config.api_base_url, "http://10.0.0.5:8080/api/books");
        assert_eq!(config.request_timeout_secs, 30);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let path = temp_path("broken.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(
            LocalConfigService::with_path(&path).read_file(),
            AppConfig::default()
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn environment_overrides_file() {
        let config = AppConfig::default().with_overrides(|key| match key {
            ENV_API_URL => Some(" http://remote:9000/api/books ".to_string()),
            ENV_TIMEOUT_SECS => Some("12".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base_url, "http://remote:9000/api/books");
        assert_eq!(config.request_timeout_secs, 12);
    }

    #[test]
    fn unparsable_timeout_is_ignored() {
        let config = AppConfig::default().with_overrides(|key| {
            (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn gateway_config_carries_timeouts() {
        let gateway = AppConfig::default().gateway_config();
        assert_eq!(gateway.base_url, DEFAULT_BASE_URL);
        assert_eq!(gateway.timeout, Some(Duration::from_secs(30)));
        assert_eq!(gateway.connect_timeout, Duration::from_secs(10));
    }
}
