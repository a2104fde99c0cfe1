//! 文档读取器
//!
//! 每种格式一个 [`DocumentReader`] 实现，由 [`CompositeReader`] 按内容类型分派。
//! 旧版 .doc 读取依赖外部转换程序，可以替换或省略。

mod docx_reader;
mod legacy_doc_reader;
mod plain_text_reader;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::ReadError;
use crate::models::{ContentKind, SourceFile};

pub use docx_reader::DocxReader;
pub use legacy_doc_reader::LegacyDocReader;
pub use plain_text_reader::PlainTextReader;

/// 把文件读成纯文本的能力
#[async_trait]
pub trait DocumentReader: Send + Sync {
    async fn read(&self, path: &Path) -> Result<String, ReadError>;
}

/// 按内容类型分派到具体读取器
pub struct CompositeReader {
    readers: HashMap<ContentKind, Arc<dyn DocumentReader>>,
}

impl CompositeReader {
    pub fn new(readers: Vec<(ContentKind, Arc<dyn DocumentReader>)>) -> Self {
        Self {
            readers: readers.into_iter().collect(),
        }
    }

    /// 根据配置注册读取器，未配置 .doc 转换程序时不注册 .doc 读取器
    pub fn from_config(config: &Config) -> Self {
        let mut readers: Vec<(ContentKind, Arc<dyn DocumentReader>)> = vec![
            (ContentKind::Docx, Arc::new(DocxReader) as Arc<dyn DocumentReader>),
            (ContentKind::Text, Arc::new(PlainTextReader) as Arc<dyn DocumentReader>),
        ];
        if let Some(command) = config.legacy_doc_converter.as_deref() {
            if let Some(reader) = LegacyDocReader::from_command_line(command) {
                readers.push((ContentKind::Doc, Arc::new(reader) as Arc<dyn DocumentReader>));
            }
        }
        Self::new(readers)
    }

    pub fn supports(&self, kind: ContentKind) -> bool {
        self.readers.contains_key(&kind)
    }

    pub async fn read(&self, file: &SourceFile) -> Result<String, ReadError> {
        let reader = self
            .readers
            .get(&file.kind)
            .ok_or_else(|| ReadError::UnsupportedContentType(file.kind.to_string()))?;

        reader.read(&file.path).await
    }
}
