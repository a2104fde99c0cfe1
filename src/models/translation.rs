//! 翻译结果模型

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::TranslationError;

/// token 用量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// 一次翻译调用的结果
///
/// 除了译文本身，还保留完整的原始响应，用于写入 `.log` 文件。
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub id: String,
    /// 响应对象类型（如 `chat.completion`），日志中记为 Endpoint
    pub object: String,
    pub model: String,
    pub system_fingerprint: Option<String>,
    pub usage: Option<TokenUsage>,
    /// 响应创建时间（Unix 秒），决定输出文件名
    pub created: u64,
    pub finish_reason: Option<String>,
    /// 第一个 choice 的消息内容
    pub content: String,
    pub raw: JsonValue,
}

// 只取需要的字段，其余内容保留在 raw 里
#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    object: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    system_fingerprint: Option<String>,
    #[serde(default)]
    usage: Option<TokenUsage>,
    created: u64,
    #[serde(default)]
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    #[serde(default)]
    finish_reason: Option<String>,
    message: WireMessage,
}

#[derive(Deserialize)]
struct WireMessage {
    #[serde(default)]
    content: Option<String>,
}

impl TranslationResult {
    /// 从 chat completion 响应的 JSON 构建翻译结果
    ///
    /// 没有 choice 或第一个 choice 没有内容时返回 `EmptyContent`。
    pub fn from_response_value(raw: JsonValue) -> Result<Self, TranslationError> {
        let wire: WireResponse = serde_json::from_value(raw.clone())?;

        let choice = wire.choices.into_iter().next();
        let finish_reason = choice.as_ref().and_then(|c| c.finish_reason.clone());
        let content = choice
            .and_then(|c| c.message.content)
            .ok_or_else(|| TranslationError::EmptyContent {
                model: wire.model.clone(),
            })?;

        Ok(Self {
            id: wire.id,
            object: wire.object,
            model: wire.model,
            system_fingerprint: wire.system_fingerprint,
            usage: wire.usage,
            created: wire.created,
            finish_reason,
            content,
            raw,
        })
    }

    /// 是否因输出 token 上限被截断
    pub fn is_truncated(&self) -> bool {
        self.finish_reason.as_deref() == Some("length")
    }
}

/// 一个源文件写出的两个结果文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub translation_path: PathBuf,
    pub log_path: PathBuf,
}
