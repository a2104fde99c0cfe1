//! 翻译服务 - 业务能力层
//!
//! 只负责"把一段文本翻译成西班牙语"，不关心文件从哪来、写到哪去
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 调用 Azure OpenAI chat completions
//! - 部署名称、API 版本和输出 token 上限来自 [`Config`]

use std::time::Duration;

use async_openai::{
    config::AzureConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::TranslationError;
use crate::models::TranslationResult;
use crate::services::prompt::SYSTEM_PROMPT;

/// 翻译能力
///
/// 成功与失败通过 `Result` 区分，错误信息不会被当成译文写出。
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<TranslationResult, TranslationError>;
}

/// 基于 Azure OpenAI 的翻译服务
pub struct AzureTranslator {
    client: Client<AzureConfig>,
    deployment: String,
    max_tokens: u32,
}

impl AzureTranslator {
    /// 创建新的翻译服务
    pub fn new(config: &Config) -> Self {
        let azure_config = AzureConfig::new()
            .with_api_base(&config.endpoint)
            .with_api_version(&config.api_version)
            .with_deployment_id(&config.deployment)
            .with_api_key(&config.api_key);

        // 失败交给批处理记录后继续下一个文件，客户端不做自动重试
        let no_retry = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        Self {
            client: Client::with_config(azure_config).with_backoff(no_retry),
            deployment: config.deployment.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// 构建请求：系统提示词 + 原文
    fn build_request(&self, text: &str) -> Result<CreateChatCompletionRequest, TranslationError> {
        let invalid =
            |e: async_openai::error::OpenAIError| TranslationError::InvalidRequest(e.to_string());

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(SYSTEM_PROMPT)
            .build()
            .map_err(invalid)?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(text)
            .build()
            .map_err(invalid)?;

        CreateChatCompletionRequestArgs::default()
            .model(&self.deployment)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .max_tokens(self.max_tokens)
            .build()
            .map_err(invalid)
    }
}

#[async_trait]
impl Translator for AzureTranslator {
    async fn translate(&self, text: &str) -> Result<TranslationResult, TranslationError> {
        debug!("调用翻译 API，部署: {}", self.deployment);
        debug!("原文长度: {} 字符", text.chars().count());

        let request = self.build_request(text)?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("翻译 API 调用失败: {}", e);
            TranslationError::ApiCallFailed {
                deployment: self.deployment.clone(),
                message: e.to_string(),
            }
        })?;

        debug!("翻译 API 调用成功");

        let result = TranslationResult::from_response_value(serde_json::to_value(&response)?)?;

        if result.is_truncated() {
            warn!(
                "⚠️ 译文达到输出上限 {} tokens 被截断，长文档需要拆分后重新翻译",
                self.max_tokens
            );
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn create_test_translator() -> AzureTranslator {
        AzureTranslator::new(&Config::new("test-key", "https://example.openai.azure.com"))
    }

    /// 读完一个 HTTP 请求（请求头 + Content-Length 指定的请求体）
    async fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let body_len = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + body_len {
                return;
            }
        }
    }

    /// 本地 HTTP 服务：每个请求都返回 500，并记录请求次数
    async fn spawn_failing_server() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(AtomicUsize::new(0));

        let counter = requests.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let counter = counter.clone();
                tokio::spawn(async move {
                    read_request(&mut stream).await;
                    counter.fetch_add(1, Ordering::SeqCst);

                    let body = "upstream overloaded";
                    let response = format!(
                        "HTTP/1.1 500 Internal Server Error\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        (endpoint, requests)
    }

    #[test]
    fn test_build_request_uses_prompt_and_cap() {
        let translator = create_test_translator();
        let request = translator.build_request("Take one tablet daily.").unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["max_tokens"], 2000);

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Take one tablet daily.");
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let (endpoint, requests) = spawn_failing_server().await;
        let translator = AzureTranslator::new(&Config::new("test-key", &endpoint));

        let result = tokio::time::timeout(
            Duration::from_secs(10),
            translator.translate("Take one tablet daily."),
        )
        .await
        .expect("翻译请求不应被重试拖住");

        match result {
            Err(TranslationError::ApiCallFailed {
                deployment,
                message,
            }) => {
                assert_eq!(deployment, "gpt-4o");
                assert!(message.contains("upstream overloaded"));
            }
            other => panic!("期望 ApiCallFailed，实际: {:?}", other.map(|r| r.content)),
        }
        assert_eq!(requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_api_failure() {
        let translator = AzureTranslator::new(&Config::new("test-key", "http://127.0.0.1:1"));

        let result = tokio::time::timeout(
            Duration::from_secs(10),
            translator.translate("Take one tablet daily."),
        )
        .await
        .expect("连接失败应立即返回");

        assert!(matches!(
            result,
            Err(TranslationError::ApiCallFailed { .. })
        ));
    }
}
