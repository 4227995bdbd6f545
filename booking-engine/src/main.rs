use booking_engine::cli::{Cli, run};
use booking_engine::{EngineConfig, init_logger_with_file, setup_environment};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv)
    setup_environment();
    let cli = Cli::parse();

    // 2. 加载配置 + 日志
    let config = EngineConfig::from_env();
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logger_with_file(level, config.log_json, config.log_dir.as_deref())?;

    tracing::debug!(?config, "Configuration loaded");

    // 3. 执行命令
    match run(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command failed: {:#}", e);
            Err(e)
        }
    }
}
