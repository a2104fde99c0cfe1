//! 日志工具模块
//!
//! 提供终端横幅、进度和统计信息的输出函数

use std::path::Path;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::orchestrator::ProcessingStats;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(160));
    info!("🚀 程序启动 - 医学文档批量翻译（英语 → 西班牙语）");
    info!("📁 扫描目录: {}", config.root_dir.display());
    info!("🤖 部署: {} (输出上限 {} tokens)", config.deployment, config.max_tokens);
    if config.legacy_doc_converter.is_none() {
        warn!("⚠️ 未配置 .doc 转换程序，.doc 文件将被跳过");
    }
    info!("{}", "=".repeat(160));
}

/// 记录文件扫描结果
pub fn log_files_found(total: usize) {
    if total == 0 {
        warn!("⚠️ 没有找到待翻译的源文件");
    } else {
        info!("✓ 找到 {} 个待翻译的源文件\n", total);
    }
}

/// 记录单个文件的处理进度
///
/// # 参数
/// - `index`: 文件序号（从1开始）
/// - `total`: 文件总数
pub fn log_file_progress(index: usize, total: usize) {
    info!(
        "{}: {} of {}",
        chrono::Local::now().format("%H:%M:%S"),
        index,
        total
    );
}

/// 记录单个文件处理失败
pub fn log_file_failed(path: &Path, err: &dyn std::error::Error) {
    error!("\n{}\n", "*".repeat(160));
    error!("Could not read file {} due to {}", path.display(), err);
    error!("\n{}\n", "*".repeat(160));
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &ProcessingStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 翻译: {}/{}", stats.translated, stats.total);
    info!("⏭️ 跳过: {}", stats.skipped);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
