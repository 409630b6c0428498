//! 配置数据结构定义
//!
//! 定义探测配置结构体、默认值和验证逻辑

use std::time::Duration;

/// 默认探测地址
pub const DEFAULT_URL: &str = "http://example.com";
/// 默认最大尝试次数
pub const DEFAULT_MAX_TRIALS: u32 = 10;
/// 默认重试间隔（秒）
pub const DEFAULT_DELAY_SECONDS: u64 = 5;

/// 探测配置，进程启动时构建一次，之后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// 目标URL
    pub url: String,
    /// 最大尝试次数
    pub max_trials: u32,
    /// 每次失败后的等待时间（秒）
    pub delay_seconds: u64,
    /// 单次请求超时（秒），为空时使用HTTP客户端默认值
    pub request_timeout_seconds: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            max_trials: DEFAULT_MAX_TRIALS,
            delay_seconds: DEFAULT_DELAY_SECONDS,
            request_timeout_seconds: None,
        }
    }
}

impl ProbeConfig {
    /// 创建新的探测配置
    pub fn new(url: impl Into<String>, max_trials: u32, delay_seconds: u64) -> Self {
        Self {
            url: url.into(),
            max_trials,
            delay_seconds,
            request_timeout_seconds: None,
        }
    }

    /// 设置单次请求超时
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = Some(seconds);
        self
    }

    /// 重试间隔
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }

    /// 单次请求超时
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

/// 配置验证函数
///
/// URL本身的合法性不在这里检查：格式错误的URL属于探测结果（立即失败），
/// 而不是配置错误。
///
/// # 参数
/// * `config` - 要验证的配置
///
/// # 返回
/// * `Result<(), String>` - 验证结果，错误时返回错误信息
pub fn validate_config(config: &ProbeConfig) -> Result<(), String> {
    if config.url.trim().is_empty() {
        return Err("URL不能为空".to_string());
    }

    if let Some(timeout) = config.request_timeout_seconds {
        if timeout == 0 {
            return Err("请求超时时间不能为0".to_string());
        }
    }

    Ok(())
}
