use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 默认搜索引擎查询地址
pub const DEFAULT_ENGINE_URL: &str = "https://www.google.com/search?q=";

/// 默认输出文件
pub const DEFAULT_OUTPUT_PATH: &str = "dorks.txt";

/// 应用程序配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 输出相关配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 搜索引擎相关配置
    #[serde(default)]
    pub search: SearchConfig,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 未指定 --output 时使用的输出路径
    pub default_path: String,
    /// 是否默认输出 HTML
    pub html: bool,
}

/// 搜索引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// HTML 链接前缀，查询字符串原样拼接在其后
    pub engine_url: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: DEFAULT_OUTPUT_PATH.to_string(),
            html: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine_url: DEFAULT_ENGINE_URL.to_string(),
        }
    }
}

impl Config {
    /// 指定了配置文件时从文件加载，否则使用默认配置
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("无法读取配置文件: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", config_path.display()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)
            .context("无法序列化配置")?;

        fs::write(config_path, content)
            .with_context(|| format!("无法写入配置文件: {}", config_path.display()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.output.default_path.trim().is_empty() {
            anyhow::bail!("output.default_path 不能为空");
        }

        let url = &self.search.engine_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("search.engine_url 必须以 http:// 或 https:// 开头");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.default_path, "dorks.txt");
        assert!(!config.output.html);
        assert_eq!(config.search.engine_url, "https://www.google.com/search?q=");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.output.default_path, deserialized.output.default_path);
        assert_eq!(config.search.engine_url, deserialized.search.engine_url);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[output]\ndefault_path = \"out.html\"\nhtml = true\n").unwrap();
        assert_eq!(config.output.default_path, "out.html");
        assert!(config.output.html);
        assert_eq!(config.search.engine_url, DEFAULT_ENGINE_URL);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: Config = toml::from_str("[output]\nhtml = true\n").unwrap();
        assert!(config.output.html);
        assert_eq!(config.output.default_path, DEFAULT_OUTPUT_PATH);
        assert!(config.validate().is_ok());

        let config: Config = toml::from_str("[search]\n").unwrap();
        assert_eq!(config.search.engine_url, DEFAULT_ENGINE_URL);
        assert!(!config.output.html);
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("autodork.toml");

        let mut original_config = Config::default();
        original_config.search.engine_url = "https://duckduckgo.com/?q=".to_string();
        original_config.save_to_file(&config_path).unwrap();

        let loaded_config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded_config.search.engine_url, "https://duckduckgo.com/?q=");

        let loaded_config = Config::load_or_default(Some(&config_path)).unwrap();
        assert_eq!(loaded_config.output.default_path, "dorks.txt");
    }

    #[test]
    fn test_load_or_default() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config.output.default_path, DEFAULT_OUTPUT_PATH);

        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(Config::load_or_default(Some(&missing)).is_err());

        let broken = temp_dir.path().join("broken.toml");
        fs::write(&broken, "[output\n").unwrap();
        assert!(Config::load_or_default(Some(&broken)).is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.search.engine_url = "ftp://example.com/?q=".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.output.default_path = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
