//! ping-url 主程序入口
//!
//! CI流水线URL可达性探测工具

use anyhow::{Context, Result};
use clap::Parser;
use ping_url::app::{ensure_reachable, render_report, resolve_config, run_action};
use ping_url::cli::{Args, OutputFormat};
use ping_url::config::EnvConfigLoader;
use ping_url::logging::LoggingSystem;
use ping_url::output::error_annotation;
use ping_url::probe::Prober;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数
    let args = Args::parse();

    // 初始化日志系统
    let _logging_system =
        LoggingSystem::setup_logging(args.log_config()).context("初始化日志系统失败")?;

    info!("ping-url v{} 启动", ping_url::VERSION);

    if let Err(e) = execute(&args).await {
        error!("{}", e);
        println!("{}", error_annotation(&e.to_string()));
        std::process::exit(1);
    }

    Ok(())
}

/// 执行一次完整的探测
async fn execute(args: &Args) -> ping_url::error::Result<()> {
    let loader = EnvConfigLoader::from_env()?;
    let (config, output) = resolve_config(args, &loader)?;
    let max_trials = config.max_trials;

    info!(
        "探测 {}，最大尝试次数 {}，重试间隔 {}秒",
        config.url, config.max_trials, config.delay_seconds
    );

    let prober = Prober::http(config)?;
    let report = run_action(&prober, &output).await?;

    // 文本格式下的失败结论由错误处理统一输出
    if report.reachable || args.format == OutputFormat::Json {
        println!("{}", render_report(&report, args.format, max_trials)?);
    }
    ensure_reachable(&report, max_trials)
}
