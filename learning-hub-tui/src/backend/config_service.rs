//! 配置服务
//!
//! 持久化主题与内容根目录。
//! 存储位置：~/.config/learning-hub/config.json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 主题名（"dark" / "light"）
    pub theme: String,
    /// 内容根目录（`content/` 相对于它解析）
    pub content_root: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            content_root: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// 主题对应的索引（0 = Dark, 1 = Light，供 view::theme 使用）
    pub fn theme_index(&self) -> u8 {
        match self.theme.as_str() {
            "light" => 1,
            _ => 0,
        }
    }

    /// 由索引写回主题名
    pub fn set_theme_index(&mut self, index: u8) {
        self.theme = if index == 1 { "light" } else { "dark" }.to_string();
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 创建配置服务，定位到平台配置目录
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("learning-hub/config.json");
        Self { path }
    }

    /// 指定配置文件路径（测试用）
    #[cfg(test)]
    fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        let body = fs::read_to_string(&self.path)
            .with_context(|| format!("read config {}", self.path.display()))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, body)
            .with_context(|| format!("write config {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let path = std::env::temp_dir().join(format!(
            "learning-hub-config-test-{}/config.json",
            std::process::id()
        ));
        let service = JsonConfigService::with_path(path.clone());

        let mut config = AppConfig::default();
        config.set_theme_index(1);
        config.content_root = PathBuf::from("/srv/lessons");

        service.save(&config).unwrap();
        let loaded = service.load().unwrap();

        assert_eq!(loaded.theme, "light");
        assert_eq!(loaded.theme_index(), 1);
        assert_eq!(loaded.content_root, PathBuf::from("/srv/lessons"));

        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn missing_file_is_an_error_and_default_fills_in() {
        let service =
            JsonConfigService::with_path(PathBuf::from("/nonexistent/learning-hub/config.json"));
        assert!(service.load().is_err());

        // 调用方用 unwrap_or_default 吞掉这个错误
        let config = service.load().unwrap_or_default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.content_root, PathBuf::from("."));
    }
}
