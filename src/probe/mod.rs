//! 可达性探测模块
//!
//! 提供单次HTTP探测、有限次数的重试循环和探测结果

pub mod pinger;
pub mod prober;
pub mod result;

// 重新导出主要类型
pub use pinger::{HttpPinger, PingOutcome, Pinger};
pub use prober::{probe, Prober};
pub use result::ProbeReport;
