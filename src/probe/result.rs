//! 探测结果数据结构
//!
//! 定义一次完整探测（含所有重试）的结果

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 探测报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// 目标URL
    pub url: String,
    /// 是否可达（在尝试次数内收到HTTP 200）
    pub reachable: bool,
    /// 实际尝试次数
    pub attempts: u32,
    /// 实际等待次数
    pub delays: u32,
    /// 最后一次失败的原因
    pub last_error: Option<String>,
    /// 总耗时
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,
    /// 结束时间
    pub finished_at: DateTime<Utc>,
}

impl ProbeReport {
    /// 创建新的探测报告，初始为不可达
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reachable: false,
            attempts: 0,
            delays: 0,
            last_error: None,
            elapsed: Duration::ZERO,
            finished_at: Utc::now(),
        }
    }

    /// 记录结束时间和总耗时
    pub fn finish(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self.finished_at = Utc::now();
        self
    }

    /// 流水线输出值，小写的 `true` / `false`
    pub fn output_value(&self) -> &'static str {
        if self.reachable {
            "true"
        } else {
            "false"
        }
    }

    /// 人类可读的结论
    ///
    /// 失败时的文本与进程退出时报告的错误一致。
    pub fn summary(&self, max_trials: u32) -> String {
        if self.reachable {
            format!(
                "Website {} is reachable after {} attempts.",
                self.url, self.attempts
            )
        } else {
            format!(
                "Website {} is not reachable after {} attempts.",
                self.url, max_trials
            )
        }
    }

    /// 转换为JSON字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Duration序列化模块
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
