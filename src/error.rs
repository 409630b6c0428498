//! 错误处理模块
//!
//! 定义应用程序的统一错误类型

use thiserror::Error;

/// ping-url 应用程序的主要错误类型
#[derive(Error, Debug)]
pub enum PingUrlError {
    /// 用尽尝试次数仍不可达
    #[error("Website {url} is not reachable after {max_trials} attempts.")]
    Unreachable { url: String, max_trials: u32 },

    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 探测相关错误
    #[error("探测错误: {0}")]
    Probe(#[from] ProbeError),

    /// 输出相关错误
    #[error("输出错误: {0}")]
    Output(#[from] OutputError),

    /// JSON序列化/反序列化错误
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// 配置错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// 环境变量或参数值无法解析
    #[error("无效的输入 {name}: {value:?} ({reason})")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    /// 配置验证错误
    #[error("配置验证失败: {0}")]
    ValidationError(String),
}

/// 探测错误类型
#[derive(Error, Debug)]
pub enum ProbeError {
    /// HTTP客户端构建失败
    #[error("HTTP客户端初始化失败: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// 输出错误类型
#[derive(Error, Debug)]
pub enum OutputError {
    /// 输出键无效
    #[error("无效的输出键: {key:?}")]
    InvalidKey { key: String },

    /// 写入输出文件失败
    #[error("写入输出文件 {path} 失败: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, PingUrlError>;
