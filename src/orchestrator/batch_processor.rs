//! 批量文件处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次运行中所有源文件的顺序处理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：根据配置创建读取器和翻译服务
//! 2. **扫描**：找出所有任务目录下的源文件
//! 3. **顺序处理**：逐个文件委托 `FileFlow`，一个完成后再处理下一个
//! 4. **错误隔离**：单个文件失败只记录日志，继续下一个
//! 5. **全局统计**：汇总成功 / 跳过 / 失败数量

use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::infrastructure::CompositeReader;
use crate::services::{AzureTranslator, PathScanner, Translator};
use crate::utils::logging;
use crate::workflow::{FileCtx, FileFlow, FileOutcome};

/// 应用主结构
pub struct App {
    config: Config,
    scanner: PathScanner,
    flow: FileFlow,
}

impl App {
    /// 初始化应用（使用 Azure OpenAI 翻译服务）
    ///
    /// 配置已在 [`Config::from_env`] 中校验，这里不会失败
    pub fn initialize(config: Config) -> Self {
        let translator = Arc::new(AzureTranslator::new(&config));
        Self::with_translator(config, translator)
    }

    /// 使用指定的翻译服务初始化应用
    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        let reader = CompositeReader::from_config(&config);
        Self {
            scanner: PathScanner::new(&config.source_prefix),
            flow: FileFlow::new(reader, translator),
            config,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        logging::log_startup(&self.config);

        let files = self.scanner.scan(&self.config.root_dir).await?;
        logging::log_files_found(files.len());

        let total = files.len();
        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        for (index, path) in files.into_iter().enumerate() {
            let ctx = FileCtx::new(index + 1, total, path);
            logging::log_file_progress(ctx.index, ctx.total);

            match self.flow.run(&ctx).await {
                Ok(FileOutcome::Translated(_)) => stats.translated += 1,
                Ok(FileOutcome::Skipped) => stats.skipped += 1,
                Err(e) => {
                    logging::log_file_failed(&ctx.path, &e);
                    stats.failed += 1;
                }
            }
        }

        logging::print_final_stats(&stats);

        Ok(stats)
    }
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total: usize,
    pub translated: usize,
    pub skipped: usize,
    pub failed: usize,
}
