//! 命令行参数定义
//!
//! 使用clap定义应用程序的命令行接口。命令行参数优先于 `INPUT_*` 环境变量。

use crate::config::ProbeConfig;
use crate::logging::LogConfig;
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// ping-url - 带有限重试的URL可达性探测工具
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ping-url",
    version = crate::VERSION,
    about = crate::APP_DESCRIPTION,
    long_about = None
)]
pub struct Args {
    /// 目标URL，覆盖 INPUT_URL
    #[arg(short, long, value_name = "URL", help = "目标URL")]
    pub url: Option<String>,

    /// 最大尝试次数，覆盖 INPUT_MAX-FREE-TRIALS
    #[arg(short = 'n', long, value_name = "COUNT", help = "最大尝试次数")]
    pub max_free_trials: Option<u32>,

    /// 重试间隔（秒），覆盖 INPUT_DELAY
    #[arg(short, long, value_name = "SECONDS", help = "重试间隔（秒）")]
    pub delay: Option<u64>,

    /// 输出文件路径，覆盖 GITHUB_OUTPUT
    #[arg(short, long, value_name = "FILE", help = "输出文件路径")]
    pub output: Option<PathBuf>,

    /// 单次请求超时（秒）
    #[arg(short, long, value_name = "SECONDS", help = "单次请求超时（秒）")]
    pub timeout: Option<u64>,

    /// 日志级别
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        help = "日志级别",
        env = "PING_URL_LOG_LEVEL"
    )]
    pub log_level: LogLevel,

    /// 是否输出JSON格式日志
    #[arg(long, help = "输出JSON格式日志")]
    pub json_logs: bool,

    /// 禁用日志颜色，标准错误不是终端时自动禁用
    #[arg(long, help = "禁用日志颜色")]
    pub no_color: bool,

    /// 结论输出格式
    #[arg(short, long, value_enum, default_value = "text", help = "结论输出格式")]
    pub format: OutputFormat,
}

/// 日志级别枚举
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum LogLevel {
    /// 调试级别
    Debug,
    /// 信息级别
    Info,
    /// 警告级别
    Warn,
    /// 错误级别
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// 输出格式枚举
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// 文本格式
    Text,
    /// JSON格式
    Json,
}

impl Args {
    /// 日志配置
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone().into(),
            json_format: self.json_logs,
            ansi: self.use_ansi(std::io::stderr().is_terminal()),
        }
    }

    /// 只有标准错误是终端且未指定 `--no-color` 时才输出颜色
    fn use_ansi(&self, stderr_is_terminal: bool) -> bool {
        stderr_is_terminal && !self.no_color
    }

    /// 用命令行参数覆盖环境变量中的配置
    pub fn apply_overrides(&self, mut config: ProbeConfig) -> ProbeConfig {
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(max_trials) = self.max_free_trials {
            config.max_trials = max_trials;
        }
        if let Some(delay) = self.delay {
            config.delay_seconds = delay;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_seconds = Some(timeout);
        }
        config
    }
}
