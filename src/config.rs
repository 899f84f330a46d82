use crate::error::ConfigError;
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 环境变量前缀
const ENV_PREFIX: &str = "DOI_CHECKER_";

/// 程序配置
///
/// 加载顺序：默认值 → TOML 配置文件 → 环境变量 → 命令行参数（后者覆盖前者）
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 同时在途的请求数量上限
    pub limit: usize,
    /// 里程碑日志间隔；未设置时由流水线类型决定（check 100，extract 500）
    pub milestone: Option<u64>,
    /// DOI 解析服务地址
    pub resolver_base_url: String,
    /// 由 PID 生成通用 DOI 时使用的前缀
    pub generic_doi_prefix: String,
    /// ArticleMeta API 地址
    pub articlemeta_base_url: String,
    /// ArticleMeta 集合缩写
    pub collection: String,
    /// 浏览器标识（解析服务对默认 UA 的表现不同）
    pub user_agent: String,
    /// 单次请求超时（秒），0 表示不设超时
    pub request_timeout_secs: u64,
    /// 未设置的可选字段在输出中的占位文本
    pub null_placeholder: String,
    /// 输入/输出字段分隔符
    pub delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: 10,
            milestone: None,
            resolver_base_url: "https://doi.org".to_string(),
            generic_doi_prefix: "10.1590/".to_string(),
            articlemeta_base_url: "http://articlemeta.scielo.org".to_string(),
            collection: "scl".to_string(),
            user_agent:
                "Mozilla/5.0 (Windows NT 6.1; Win64; x64; rv:61.0) Gecko/20100101 Firefox/61.0"
                    .to_string(),
            request_timeout_secs: 30,
            null_placeholder: "None".to_string(),
            delimiter: ';',
        }
    }
}

impl Config {
    /// 加载配置：可选的 TOML 文件 + 环境变量覆盖
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        base.with_env()
    }

    /// 从 TOML 文件读取配置，缺失字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: origin.to_string(),
            source,
        })
    }

    /// 使用进程环境变量覆盖配置
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// 使用给定的查找函数覆盖配置（便于测试）
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(limit) = parse_var(&var, "LIMIT", "usize")? {
            self.limit = limit;
        }
        if let Some(milestone) = parse_var(&var, "MILESTONE", "u64")? {
            self.milestone = Some(milestone);
        }
        if let Some(timeout) = parse_var(&var, "REQUEST_TIMEOUT_SECS", "u64")? {
            self.request_timeout_secs = timeout;
        }
        if let Some(delimiter) = parse_var(&var, "DELIMITER", "char")? {
            self.delimiter = delimiter;
        }
        self.resolver_base_url = var("RESOLVER_BASE_URL").unwrap_or(self.resolver_base_url);
        self.generic_doi_prefix = var("GENERIC_DOI_PREFIX").unwrap_or(self.generic_doi_prefix);
        self.articlemeta_base_url =
            var("ARTICLEMETA_BASE_URL").unwrap_or(self.articlemeta_base_url);
        self.collection = var("COLLECTION").unwrap_or(self.collection);
        self.user_agent = var("USER_AGENT").unwrap_or(self.user_agent);
        self.null_placeholder = var("NULL_PLACEHOLDER").unwrap_or(self.null_placeholder);

        Ok(self)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "limit".to_string(),
                reason: "并发上限必须大于 0".to_string(),
            });
        }
        if self.milestone == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "milestone".to_string(),
                reason: "里程碑间隔必须大于 0".to_string(),
            });
        }
        self.resolver_url()?;
        self.articlemeta_url()?;
        Ok(())
    }

    /// 解析服务的基础 URL
    pub fn resolver_url(&self) -> Result<Url, ConfigError> {
        parse_url("resolver_base_url", &self.resolver_base_url)
    }

    /// ArticleMeta 的基础 URL
    pub fn articlemeta_url(&self) -> Result<Url, ConfigError> {
        parse_url("articlemeta_base_url", &self.articlemeta_base_url)
    }

    /// 取里程碑间隔，未配置时使用流水线默认值
    pub fn milestone_or(&self, default: u64) -> u64 {
        self.milestone.unwrap_or(default)
    }
}

fn parse_var<T, F>(var: &F, name: &str, expected_type: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: format!("{}{}", ENV_PREFIX, name),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

fn parse_url(field: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|_| ConfigError::InvalidUrl {
        field: field.to_string(),
        value: value.to_string(),
    })?;
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.limit, 10);
        assert_eq!(config.milestone_or(100), 100);
        assert_eq!(config.resolver_base_url, "https://doi.org");
        assert_eq!(config.generic_doi_prefix, "10.1590/");
        assert_eq!(config.delimiter, ';');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config = Config::from_toml_str("limit = 3\nmilestone = 500\n", "inline").unwrap();
        assert_eq!(config.limit, 3);
        assert_eq!(config.milestone, Some(500));
        assert_eq!(config.collection, "scl");
    }

    #[test]
    fn invalid_toml_is_reported_with_origin() {
        let err = Config::from_toml_str("limit = \"many\"", "bad.toml").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseFailed { ref path, .. } if path == "bad.toml"));
    }

    #[test]
    fn env_overrides_take_precedence() {
        let vars: HashMap<&str, &str> = [
            ("DOI_CHECKER_LIMIT", "42"),
            ("DOI_CHECKER_RESOLVER_BASE_URL", "http://127.0.0.1:9999"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_env_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.limit, 42);
        assert_eq!(config.resolver_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.collection, "scl");
    }

    #[test]
    fn unparsable_env_value_is_an_error() {
        let err = Config::default()
            .with_env_from(|key| (key == "DOI_CHECKER_LIMIT").then(|| "ten".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarParseFailed { .. }));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = Config {
            limit: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn resolver_url_without_host_is_rejected() {
        let config = Config {
            resolver_base_url: "mailto:someone".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
