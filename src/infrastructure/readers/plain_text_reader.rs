use std::path::Path;

use async_trait::async_trait;

use super::DocumentReader;
use crate::error::ReadError;

/// 纯文本读取器，按 UTF-8 原样读取
pub struct PlainTextReader;

#[async_trait]
impl DocumentReader for PlainTextReader {
    async fn read(&self, path: &Path) -> Result<String, ReadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ReadError::io(path, e))?;

        String::from_utf8(bytes).map_err(|_| ReadError::Encoding {
            path: path.to_path_buf(),
        })
    }
}
