//! 错误类型
//!
//! - `AppError`：启动期与任务级错误（配置、输入、输出、HTTP 客户端）
//! - `ConfigError`：配置加载与校验错误
//! - `ProbeError`：单次网络探测的传输层错误（只在单个标识符的任务内部流转）
//! - `ArticleMetaError`：ArticleMeta 查询失败（传输、非 JSON、缺少 doi）

use std::io;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 读取输入文件失败（启动期致命错误）
    #[error("读取输入文件失败 ({path}): {source}")]
    InputRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// 打开输出文件失败（启动期致命错误）
    #[error("打开输出文件失败 ({path}): {source}")]
    OutputOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// 写入结果记录失败（只对当前任务致命）
    #[error("写入结果记录失败: {0}")]
    SinkWrite(#[source] io::Error),

    /// HTTP 客户端构建失败
    #[error("HTTP 客户端构建失败: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// TOML 解析失败
    #[error("TOML 解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },

    /// 无效的 URL
    #[error("无效的 URL ({field}): {value}")]
    InvalidUrl { field: String, value: String },

    /// 无效的取值
    #[error("无效的配置值 {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 单次探测的传输层错误
///
/// 连接失败、超时、响应格式错误都归为此类，`description` 会原样写入结果记录的 error 字段。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct ProbeError {
    pub description: String,
}

impl ProbeError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        ProbeError::new(err.to_string())
    }
}

/// ArticleMeta 查询失败的原因
///
/// 只有 `Transport` 属于网络层故障，其余两类是正常的“未登记 DOI”结果。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleMetaError {
    #[error("{0}")]
    Transport(#[from] ProbeError),

    #[error("invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("missing field 'doi'")]
    MissingDoi,
}

impl ArticleMetaError {
    /// 是否为网络层故障（需要单独记录错误日志）
    pub fn is_transport(&self) -> bool {
        matches!(self, ArticleMetaError::Transport(_))
    }
}

impl From<reqwest::Error> for ArticleMetaError {
    fn from(err: reqwest::Error) -> Self {
        ArticleMetaError::Transport(err.into())
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_failures_are_network_faults() {
        let transport = ArticleMetaError::from(ProbeError::new("connection refused"));
        assert!(transport.is_transport());
        assert_eq!(transport.to_string(), "connection refused");

        assert!(!ArticleMetaError::MissingDoi.is_transport());
        assert_eq!(ArticleMetaError::MissingDoi.to_string(), "missing field 'doi'");

        let garbage = ArticleMetaError::InvalidJson("expected value".to_string());
        assert!(!garbage.is_transport());
        assert!(garbage.to_string().starts_with("invalid JSON response"));
    }
}
