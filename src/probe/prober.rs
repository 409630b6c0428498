//! 重试循环实现
//!
//! 在有限的尝试次数内反复探测目标，直到收到HTTP 200、
//! 遇到永久失败或用尽次数。

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::probe::pinger::{HttpPinger, PingOutcome, Pinger};
use crate::probe::result::ProbeReport;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

/// 可达性探测器
pub struct Prober<P: Pinger = HttpPinger> {
    /// 单次探测实现
    pinger: P,
    /// 探测配置
    config: ProbeConfig,
}

impl Prober<HttpPinger> {
    /// 使用HTTP探测器创建
    ///
    /// # 参数
    /// * `config` - 探测配置
    ///
    /// # 返回
    /// * `Result<Self>` - 探测器实例
    pub fn http(config: ProbeConfig) -> Result<Self> {
        let pinger = HttpPinger::new(config.request_timeout())?;
        Ok(Self::new(pinger, config))
    }
}

impl<P: Pinger> Prober<P> {
    /// 使用指定的单次探测实现创建
    pub fn new(pinger: P, config: ProbeConfig) -> Self {
        Self { pinger, config }
    }

    /// 探测配置
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// 执行完整的探测流程
    ///
    /// 每次暂时失败之后都会等待 `delay_seconds`，包括最后一次。
    /// 永久失败立即结束循环，不再等待。
    pub async fn run(&self) -> ProbeReport {
        let started = Instant::now();
        let url = self.config.url.as_str();
        let delay = self.config.delay();
        let mut report = ProbeReport::new(url);

        debug!(
            "开始探测 {}，最大尝试次数 {}，重试间隔 {:?}",
            url, self.config.max_trials, delay
        );

        let mut trials = 0;
        while trials < self.config.max_trials {
            report.attempts += 1;

            match self.pinger.ping(url).await {
                PingOutcome::Reachable => {
                    info!("Website {} is reachable.", url);
                    report.reachable = true;
                    break;
                }
                PingOutcome::Permanent(reason) => {
                    error!("URL无效，停止重试: {}", reason);
                    report.last_error = Some(reason);
                    break;
                }
                PingOutcome::Transient(reason) => {
                    warn!("Attempt {} failed: {}", trials + 1, reason);
                    report.last_error = Some(reason);
                    tokio::time::sleep(delay).await;
                    report.delays += 1;
                }
            }

            trials += 1;
        }

        report.finish(started.elapsed())
    }

    /// 执行探测，只返回是否可达
    pub async fn probe(&self) -> bool {
        self.run().await.reachable
    }
}

/// 使用HTTP探测器探测URL是否可达
///
/// # 参数
/// * `url` - 目标URL
/// * `max_trials` - 最大尝试次数
/// * `delay_seconds` - 每次失败后的等待时间（秒）
///
/// # 返回
/// * `Result<bool>` - 是否可达，只有HTTP客户端初始化失败时返回错误
pub async fn probe(url: &str, max_trials: u32, delay_seconds: u64) -> Result<bool> {
    let prober = Prober::http(ProbeConfig::new(url, max_trials, delay_seconds))?;
    Ok(prober.probe().await)
}
