use anyhow::Result;
use med_translate::config::Config;
use med_translate::logger;
use med_translate::orchestrator::App;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置（缺少凭据时立即退出）
    let config = Config::from_env()?;

    // 初始化并运行应用，单个文件的失败不影响退出码
    App::initialize(config).run().await?;

    Ok(())
}
