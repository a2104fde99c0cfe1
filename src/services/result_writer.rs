//! 结果写入服务 - 业务能力层
//!
//! 只负责"把译文和日志写到源文件旁边"，不关心流程

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::error::WriteError;
use crate::models::{TranslationResult, WrittenArtifacts};

/// 输出文件名前缀
pub const OUTPUT_PREFIX: &str = "gpt_translation";

/// 结果写入服务
///
/// 职责：
/// - 追加译文到 `gpt_translation-<created>.txt`
/// - 追加报告和完整响应到 `gpt_translation-<created>.log`
/// - 在终端回显同样的信息
#[derive(Debug, Default)]
pub struct ResultWriter;

impl ResultWriter {
    pub fn new() -> Self {
        Self
    }

    /// 输出文件路径，只由响应时间决定
    pub fn artifact_paths(source: &Path, created: u64) -> WrittenArtifacts {
        let dir = source.parent().unwrap_or_else(|| Path::new("."));
        WrittenArtifacts {
            translation_path: dir.join(format!("{}-{}.txt", OUTPUT_PREFIX, created)),
            log_path: dir.join(format!("{}-{}.log", OUTPUT_PREFIX, created)),
        }
    }

    /// 写入一个源文件的翻译结果
    pub fn write(
        &self,
        source: &Path,
        result: &TranslationResult,
    ) -> Result<WrittenArtifacts, WriteError> {
        let report = render_report(source, result);

        info!("\n{}\n", "=".repeat(80));
        info!("{}\n{}", report, result.content);

        let artifacts = Self::artifact_paths(source, result.created);

        append(&artifacts.translation_path, &result.content)?;

        let log_entry = format!(
            "{}\nTranslation object: {}",
            report,
            to_pretty_json(&result.raw)?
        );
        append(&artifacts.log_path, &log_entry)?;

        debug!(
            "结果已写入: {} / {}",
            artifacts.translation_path.display(),
            artifacts.log_path.display()
        );

        Ok(artifacts)
    }
}

/// 渲染报告头（元数据部分），日志文件和终端回显共用
pub fn render_report(source: &Path, result: &TranslationResult) -> String {
    let usage = result.usage.unwrap_or_default();
    format!(
        "Translation of {}\n\
         Endpoint: {}\n\
         Model: {}\n\
         Fingerprint: {}\n\
         Tokens: Prompt {}; Completion {}; Total {}\n\
         Time: {}\n\
         Finish reason: {}\n",
        source.display(),
        result.object,
        result.model,
        result.system_fingerprint.as_deref().unwrap_or("None"),
        usage.prompt_tokens,
        usage.completion_tokens,
        usage.total_tokens,
        result.created,
        result.finish_reason.as_deref().unwrap_or("None"),
    )
}

/// 4 空格缩进的 JSON
fn to_pretty_json(value: &serde_json::Value) -> Result<String, WriteError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn append(path: &Path, content: &str) -> Result<(), WriteError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| WriteError::write_failed(path, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| WriteError::write_failed(path, e))
}
