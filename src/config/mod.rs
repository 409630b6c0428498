//! 配置管理模块
//!
//! 提供探测配置的数据结构、验证和环境变量加载功能

pub mod loader;
pub mod types;

// 重新导出主要类型
pub use loader::EnvConfigLoader;
pub use types::{validate_config, ProbeConfig};
