//! # Config 模块
//!
//! script-check 的配置。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (script-check.json)
//! 3. 默认值（最低）

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// 默认配置文件名（相对于 workspace root）
pub const DEFAULT_CONFIG_PATH: &str = "script-check.json";

/// 脚本检查配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptCheckConfig {
    /// 脚本目录（未指定路径参数时使用）
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,

    /// 视为脚本的文件扩展名（不带 `.`）
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// 已注册的动作名；为空时不检查未知动作
    #[serde(default)]
    pub known_actions: Vec<String>,

    /// 是否把警告当作错误
    #[serde(default)]
    pub warnings_as_errors: bool,
}

fn default_scripts_dir() -> PathBuf {
    PathBuf::from("assets/scripts")
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "ink".to_string()]
}

impl Default for ScriptCheckConfig {
    fn default() -> Self {
        Self {
            scripts_dir: default_scripts_dir(),
            extensions: default_extensions(),
            known_actions: Vec::new(),
            warnings_as_errors: false,
        }
    }
}

impl ScriptCheckConfig {
    /// 加载配置文件
    ///
    /// 文件不存在时使用默认配置；存在但无法读取或解析时返回错误。
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "配置文件加载成功");
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "extensions 不能为空".to_string(),
            ));
        }

        if let Some(ext) = self
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(ConfigError::ValidationFailed(format!(
                "无效的扩展名 '{}'（不带 `.`，且不能为空）",
                ext
            )));
        }

        Ok(())
    }

    /// 判断文件扩展名是否在配置中
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("配置文件读取失败 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// 解析失败
    #[error("配置文件解析失败 {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}
