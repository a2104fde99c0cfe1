//! 路径扫描服务 - 业务能力层
//!
//! 只负责"找出要翻译的文件"，不关心文件内容

use std::path::{Path, PathBuf};

use regex::Regex;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::ScanError;

/// 路径扫描服务
///
/// 职责：
/// - 列出根目录下以数字开头的任务目录
/// - 在每个任务目录中递归查找以指定前缀开头的文件
pub struct PathScanner {
    job_dir_pattern: Regex,
    source_prefix: String,
}

impl PathScanner {
    /// 创建扫描服务，`source_prefix` 按不区分大小写匹配
    pub fn new(source_prefix: impl Into<String>) -> Self {
        Self {
            job_dir_pattern: Regex::new(r"^\d").expect("静态正则表达式"),
            source_prefix: source_prefix.into().to_lowercase(),
        }
    }

    /// 是否为任务目录名（以数字开头）
    pub fn is_job_dir_name(&self, name: &str) -> bool {
        self.job_dir_pattern.is_match(name)
    }

    /// 是否为源文件名（不区分大小写地以前缀开头）
    pub fn is_source_file_name(&self, name: &str) -> bool {
        name.to_lowercase().starts_with(&self.source_prefix)
    }

    /// 扫描根目录，返回所有源文件的绝对路径
    ///
    /// 任务目录按名称排序，目录内的文件也按名称排序。
    pub async fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let root = std::path::absolute(root).map_err(|e| ScanError::RootUnreadable {
            path: root.to_path_buf(),
            source: e,
        })?;

        let job_dirs = self.job_directories(&root).await?;
        debug!("找到 {} 个任务目录", job_dirs.len());

        let mut files = Vec::new();
        for dir in &job_dirs {
            files.extend(self.collect_source_files(dir).await);
        }

        Ok(files)
    }

    /// 列出以数字开头的任务目录
    pub async fn job_directories(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let unreadable = |e| ScanError::RootUnreadable {
            path: root.to_path_buf(),
            source: e,
        };

        let mut entries = fs::read_dir(root).await.map_err(unreadable)?;
        let mut dirs = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !self.is_job_dir_name(name) {
                continue;
            }
            match entry.file_type().await {
                Ok(file_type) if file_type.is_dir() => dirs.push(entry.path()),
                Ok(_) => {}
                Err(e) => warn!("⚠️ 无法读取 {} 的类型: {}", entry.path().display(), e),
            }
        }

        dirs.sort();
        Ok(dirs)
    }

    /// 递归收集目录下所有源文件，无法读取的子目录跳过
    async fn collect_source_files(&self, dir: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            let mut entries = match fs::read_dir(&current).await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("⚠️ 无法读取目录 {}: {}", current.display(), e);
                    continue;
                }
            };

            let mut found = Vec::new();
            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(e) => {
                        warn!("⚠️ 读取目录 {} 时出错: {}", current.display(), e);
                        break;
                    }
                };
                let path = entry.path();
                match entry.file_type().await {
                    Ok(t) if t.is_dir() => pending.push(path),
                    Ok(t) if t.is_file() => {
                        let is_source = entry
                            .file_name()
                            .to_str()
                            .is_some_and(|name| self.is_source_file_name(name));
                        if is_source {
                            found.push(path);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => warn!("⚠️ 无法读取 {} 的类型: {}", path.display(), e),
                }
            }

            found.sort();
            files.extend(found);
        }

        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn touch(path: &Path) {
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_job_dir_names() {
        let scanner = PathScanner::new("source");
        assert!(scanner.is_job_dir_name("1-intake"));
        assert!(scanner.is_job_dir_name("2024"));
        assert!(!scanner.is_job_dir_name("intake-1"));
        assert!(!scanner.is_job_dir_name(""));
    }

    #[test]
    fn test_source_file_names() {
        let scanner = PathScanner::new("source");
        assert!(scanner.is_source_file_name("source.txt"));
        assert!(scanner.is_source_file_name("SOURCE_v2.docx"));
        assert!(scanner.is_source_file_name("Source-final.doc"));
        assert!(!scanner.is_source_file_name("my_source.txt"));
        assert!(!scanner.is_source_file_name("gpt_translation-1700000000.txt"));
    }

    #[tokio::test]
    async fn test_scan_filters_dirs_and_files_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("1-intake/source.txt"));
        touch(&root.join("1-intake/notes.txt"));
        touch(&root.join("1-intake/en/deep/Source.docx"));
        touch(&root.join("2-discharge/SOURCE.doc"));
        touch(&root.join("intake-1/source.txt"));
        touch(&root.join("source.txt"));
        // 以数字开头的普通文件不是任务目录
        touch(&root.join("3-file.txt"));

        let scanner = PathScanner::new("source");
        let files = scanner.scan(root).await.unwrap();

        let mut relative: Vec<PathBuf> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        relative.sort();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("1-intake/en/deep/Source.docx"),
                PathBuf::from("1-intake/source.txt"),
                PathBuf::from("2-discharge/SOURCE.doc"),
            ]
        );
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[tokio::test]
    async fn test_scan_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::create_dir(dir.path().join("7-empty")).unwrap();

        let files = PathScanner::new("source").scan(dir.path()).await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_scan_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PathScanner::new("source")
            .scan(&dir.path().join("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::RootUnreadable { .. }));
    }
}
