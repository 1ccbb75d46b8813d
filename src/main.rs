use anyhow::Result;
use clap::Parser;
use random_exam::cli::Cli;
use random_exam::utils::logging;
use random_exam::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置：默认值 → 配置文件 → 环境变量 → 命令行
    let config = cli.apply(Config::load(cli.config.as_deref())?);

    // 初始化日志：终端 + 日志文件
    logging::init(config.verbose_logging, Some(&config.output_log_file))?;
    if let Some(path) = &cli.config {
        tracing::info!("已加载配置文件: {}", path.display());
    }

    // 初始化并运行应用；题库不足时已输出提示，正常退出
    let _report = App::from_config(config)?.run().await?;

    Ok(())
}
