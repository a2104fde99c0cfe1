use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::DocumentReader;
use crate::error::ReadError;

/// 旧版 .doc 读取器
///
/// 调用外部转换程序（默认 `antiword`），把源文件路径作为最后一个参数，
/// 读取其标准输出作为文本。
#[derive(Debug, Clone)]
pub struct LegacyDocReader {
    program: String,
    args: Vec<String>,
}

impl LegacyDocReader {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// 从命令行字符串创建（按空白拆分），空字符串返回 `None`
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }
}

#[async_trait]
impl DocumentReader for LegacyDocReader {
    async fn read(&self, path: &Path) -> Result<String, ReadError> {
        debug!("调用转换程序: {} {:?} {}", self.program, self.args, path.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ReadError::ConverterUnavailable {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ReadError::ConversionFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ReadError::Encoding {
            path: path.to_path_buf(),
        })
    }
}
