//! ping-url - CI流水线URL可达性探测工具
//!
//! 在有限次数内反复请求一个URL，并把结果写入流水线输出：
//! - 固定间隔的重试循环
//! - 区分可重试与不可重试的失败
//! - 以追加方式写入 `key=value` 输出文件
//! - 结构化日志记录

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod probe;

// 重新导出主要类型
pub use config::ProbeConfig;
pub use error::PingUrlError;
pub use output::{emit_output, GithubOutput};
pub use probe::{probe, HttpPinger, PingOutcome, Pinger, ProbeReport, Prober};

/// 应用程序版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用程序名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// 应用程序描述
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
