//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志，级别由 `RUST_LOG` 控制，默认 `info`
///
/// 重复调用不会报错（测试中可能多次初始化）。
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
