//! 文件处理流程 - 流程层
//!
//! 核心职责：定义"一个文件"的完整处理流程
//!
//! 流程顺序：
//! 1. 按扩展名确定格式（不支持 → 跳过）
//! 2. 读取文本
//! 3. 翻译
//! 4. 写出译文和日志

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::infrastructure::CompositeReader;
use crate::models::{SourceFile, WrittenArtifacts};
use crate::services::{ResultWriter, Translator};
use crate::utils::logging::truncate_text;
use crate::workflow::file_ctx::FileCtx;

/// 文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// 翻译并写出成功
    Translated(WrittenArtifacts),
    /// 跳过（格式不支持）
    Skipped,
}

/// 文件处理流程
///
/// - 编排 读取 → 翻译 → 写入
/// - 不决定处理哪些文件，也不做统计
/// - 任一步失败直接返回错误，由编排层记录并继续
pub struct FileFlow {
    reader: CompositeReader,
    translator: Arc<dyn Translator>,
    writer: ResultWriter,
}

impl FileFlow {
    pub fn new(reader: CompositeReader, translator: Arc<dyn Translator>) -> Self {
        Self {
            reader,
            translator,
            writer: ResultWriter::new(),
        }
    }

    pub async fn run(&self, ctx: &FileCtx) -> AppResult<FileOutcome> {
        let Some(file) = SourceFile::from_path(&ctx.path) else {
            info!("{} 跳过: 不支持的文件格式", ctx);
            return Ok(FileOutcome::Skipped);
        };

        if !self.reader.supports(file.kind) {
            warn!("{} 跳过: 未配置 {} 读取器", ctx, file.kind);
            return Ok(FileOutcome::Skipped);
        }

        let content = self.reader.read(&file).await?;
        debug!(
            "{} 读取完成，{} 字符: {}",
            ctx,
            content.chars().count(),
            truncate_text(&content, 80)
        );

        let translation = self.translator.translate(&content).await?;

        let artifacts = self.writer.write(&file.path, &translation)?;

        Ok(FileOutcome::Translated(artifacts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, TranslationError};
    use crate::infrastructure::{DocumentReader, PlainTextReader};
    use crate::models::{ContentKind, TranslationResult};
    use async_trait::async_trait;
    use serde_json::json;
    use std::fs;
    use std::sync::Mutex;

    /// 记录收到的原文，返回固定译文
    struct EchoTranslator {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate(&self, text: &str) -> Result<TranslationResult, TranslationError> {
            self.seen.lock().unwrap().push(text.to_string());
            TranslationResult::from_response_value(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "gpt-4o",
                "choices": [{ "message": { "content": "Hola" }, "finish_reason": "stop" }]
            }))
        }
    }

    fn text_only_flow(translator: Arc<dyn Translator>) -> FileFlow {
        let reader = CompositeReader::new(vec![(
            ContentKind::Text,
            Arc::new(PlainTextReader) as Arc<dyn DocumentReader>,
        )]);
        FileFlow::new(reader, translator)
    }

    #[tokio::test]
    async fn test_translates_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.txt");
        fs::write(&path, "Hello").unwrap();

        let translator = Arc::new(EchoTranslator {
            seen: Mutex::new(Vec::new()),
        });
        let flow = text_only_flow(translator.clone());

        let outcome = flow.run(&FileCtx::new(1, 1, path)).await.unwrap();

        assert_eq!(*translator.seen.lock().unwrap(), vec!["Hello".to_string()]);
        match outcome {
            FileOutcome::Translated(artifacts) => {
                assert_eq!(fs::read_to_string(artifacts.translation_path).unwrap(), "Hola");
            }
            FileOutcome::Skipped => panic!("不应跳过"),
        }
    }

    #[tokio::test]
    async fn test_skips_unsupported_and_unregistered() {
        let dir = tempfile::tempdir().unwrap();
        let translator = Arc::new(EchoTranslator {
            seen: Mutex::new(Vec::new()),
        });
        let flow = text_only_flow(translator.clone());

        let pdf = dir.path().join("source.pdf");
        fs::write(&pdf, "%PDF").unwrap();
        let doc = dir.path().join("source.doc");
        fs::write(&doc, "legacy").unwrap();

        assert_eq!(flow.run(&FileCtx::new(1, 2, pdf)).await.unwrap(), FileOutcome::Skipped);
        assert_eq!(flow.run(&FileCtx::new(2, 2, doc)).await.unwrap(), FileOutcome::Skipped);
        assert!(translator.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let flow = text_only_flow(Arc::new(EchoTranslator {
            seen: Mutex::new(Vec::new()),
        }));

        let err = flow
            .run(&FileCtx::new(1, 1, dir.path().join("source.txt")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Read(_)));
    }
}
