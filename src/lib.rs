//! # Med Translate
//!
//! 批量把医学文档（.docx / .doc / .txt）从英语翻译成西班牙语的命令行工具
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/readers` - 各格式的文档读取器，按内容类型分派
//!
//! ### ② 业务能力层（Services）
//! - `PathScanner` - 找出任务目录下的源文件
//! - `Translator` / `AzureTranslator` - 调用 LLM 翻译
//! - `ResultWriter` - 写译文和日志文件
//!
//! ### ③ 流程层（Workflow）
//! - `FileFlow` - 单个文件：读取 → 翻译 → 写入
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 顺序处理所有文件，隔离单个文件的失败
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ContentKind, SourceFile, TranslationResult};
pub use orchestrator::{App, ProcessingStats};
pub use services::Translator;
pub use workflow::{FileCtx, FileFlow, FileOutcome};
