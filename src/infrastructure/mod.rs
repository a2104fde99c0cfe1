//! 基础设施层（Infrastructure Layer）
//!
//! 持有与外部格式、外部程序打交道的能力，只暴露"把文件读成文本"这一接口。

pub mod readers;

pub use readers::{
    CompositeReader, DocumentReader, DocxReader, LegacyDocReader, PlainTextReader,
};
