//! 源文件模型
//!
//! 描述"要翻译哪个文件、它是什么格式"

use std::fmt;
use std::path::{Path, PathBuf};

/// 文件内容类型，由扩展名推断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Word 2007+ 文档
    Docx,
    /// 旧版 Word 文档
    Doc,
    /// 纯文本
    Text,
}

impl ContentKind {
    /// 根据扩展名推断类型（不区分大小写），不支持的扩展名返回 `None`
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "docx" => Some(ContentKind::Docx),
            "doc" => Some(ContentKind::Doc),
            "txt" => Some(ContentKind::Text),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ContentKind::Docx => "docx",
            ContentKind::Doc => "doc",
            ContentKind::Text => "txt",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// 待翻译的源文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: ContentKind,
}

impl SourceFile {
    /// 从路径创建源文件，扩展名不受支持时返回 `None`
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let kind = ContentKind::from_path(&path)?;
        Some(Self { path, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(ContentKind::from_path(Path::new("a/source.docx")), Some(ContentKind::Docx));
        assert_eq!(ContentKind::from_path(Path::new("a/source.DOC")), Some(ContentKind::Doc));
        assert_eq!(ContentKind::from_path(Path::new("a/Source.txt")), Some(ContentKind::Text));
        assert_eq!(ContentKind::from_path(Path::new("a/source.pdf")), None);
        assert_eq!(ContentKind::from_path(Path::new("a/source")), None);
    }

    #[test]
    fn test_source_file_from_path() {
        let file = SourceFile::from_path("1-intake/en/source.txt").unwrap();
        assert_eq!(file.kind, ContentKind::Text);
        assert_eq!(file.path, PathBuf::from("1-intake/en/source.txt"));
        assert!(SourceFile::from_path("1-intake/source.rtf").is_none());
    }
}
