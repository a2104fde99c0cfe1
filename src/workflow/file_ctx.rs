//! 文件处理上下文
//!
//! 封装"我正在处理第几个文件、哪个文件"这一信息

use std::fmt::Display;
use std::path::PathBuf;

/// 文件处理上下文
#[derive(Debug, Clone)]
pub struct FileCtx {
    /// 文件序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 本次运行的文件总数
    pub total: usize,

    /// 源文件路径
    pub path: PathBuf,
}

impl FileCtx {
    pub fn new(index: usize, total: usize, path: PathBuf) -> Self {
        Self { index, total, path }
    }
}

impl Display for FileCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件 {}/{}] {}", self.index, self.total, self.path.display())
    }
}
