//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API Key（为空则不启用认证）
    #[serde(default)]
    pub api_key: String,
}

/// 市场配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// 交易所时区（IANA 标识）
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// API 配置
    #[serde(default)]
    pub api: ApiConfig,
    /// 市场配置
    #[serde(default)]
    pub market: MarketConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

// 默认值函数
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_timezone() -> String {
    "America/New_York".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            api: ApiConfig::default(),
            market: MarketConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值
    ///
    /// 在日志系统初始化前调用，加载结果由调用方记录
    pub fn load() -> (Self, Option<String>) {
        let config_paths = ["config.json", "config/config.json"];

        for path in config_paths {
            if Path::new(path).exists() {
                if let Ok(config) = Self::from_file(path) {
                    return (config, Some(path.to_string()));
                }
            }
        }

        (Self::default(), None)
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试默认配置
    #[test]
    fn test_default_config() {
        println!("\n========== 测试默认配置 ==========");
        let config = AppConfig::default();
        println!("  绑定地址: {}", config.bind_addr());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.market.timezone, "America/New_York");
        assert_eq!(config.log.level, "info");
        assert!(config.api.api_key.is_empty());
        println!("✅ 默认配置测试通过！");
    }

    /// 测试部分字段缺省的 JSON 配置
    #[test]
    fn test_partial_config() {
        println!("\n========== 测试部分配置 ==========");
        let json = r#"{"server": {"port": 9000}, "api": {"api_key": "secret"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        println!("  绑定地址: {}", config.bind_addr());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.api.api_key, "secret");
        assert_eq!(config.market.timezone, "America/New_York");
        println!("✅ 部分配置测试通过！");
    }
}
