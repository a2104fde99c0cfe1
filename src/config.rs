use std::path::PathBuf;

use reqwest::Url;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
pub const ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";

/// 程序配置
///
/// 启动时构建一次，之后显式传给各个组件，组件内部不再读取环境变量。
#[derive(Clone, Debug)]
pub struct Config {
    // --- 翻译服务配置 ---
    pub api_key: String,
    pub endpoint: String,
    /// Azure 部署名称（即模型）
    pub deployment: String,
    pub api_version: String,
    /// 单次翻译的输出 token 上限
    pub max_tokens: u32,
    // --- 文件扫描配置 ---
    /// 扫描根目录（默认为当前工作目录）
    pub root_dir: PathBuf,
    /// 源文件名前缀（不区分大小写）
    pub source_prefix: String,
    /// .doc 转换命令，`None` 表示不处理 .doc 文件
    pub legacy_doc_converter: Option<String>,
}

impl Config {
    /// 使用给定凭据和默认值创建配置
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            deployment: "gpt-4o".to_string(),
            api_version: "2024-06-01".to_string(),
            max_tokens: 2000,
            root_dir: PathBuf::from("."),
            source_prefix: "source".to_string(),
            legacy_doc_converter: Some("antiword".to_string()),
        }
    }

    /// 从环境变量加载配置
    ///
    /// `AZURE_OPENAI_API_KEY` 和 `AZURE_OPENAI_ENDPOINT` 必须存在且非空，
    /// 其余变量可选。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::EnvVarNotFound {
                    var_name: name.to_string(),
                })
        };

        let api_key = required(API_KEY_VAR)?;
        let endpoint = required(ENDPOINT_VAR)?;
        if Url::parse(&endpoint).is_err() {
            return Err(ConfigError::EnvVarParseFailed {
                var_name: ENDPOINT_VAR.to_string(),
                value: endpoint,
                expected_type: "URL".to_string(),
            });
        }

        let mut config = Self::new(api_key, endpoint);

        if let Some(deployment) = lookup("AZURE_OPENAI_DEPLOYMENT").filter(|v| !v.is_empty()) {
            config.deployment = deployment;
        }
        if let Some(api_version) = lookup("AZURE_OPENAI_API_VERSION").filter(|v| !v.is_empty()) {
            config.api_version = api_version;
        }
        if let Some(value) = lookup("TRANSLATION_MAX_TOKENS") {
            config.max_tokens = value
                .parse()
                .map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "TRANSLATION_MAX_TOKENS".to_string(),
                    value,
                    expected_type: "u32".to_string(),
                })?;
        }
        if let Some(converter) = lookup("LEGACY_DOC_CONVERTER") {
            config.legacy_doc_converter = Some(converter).filter(|c| !c.trim().is_empty());
        }

        config.root_dir = std::env::current_dir().map_err(ConfigError::WorkingDirectory)?;

        Ok(config)
    }
}
