//! 配置加载器实现
//!
//! 从CI运行器注入的 `INPUT_*` 环境变量中读取探测配置

use crate::config::types::{
    validate_config, ProbeConfig, DEFAULT_DELAY_SECONDS, DEFAULT_MAX_TRIALS, DEFAULT_URL,
};
use crate::error::{ConfigError, PingUrlError, Result};
use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;
use std::str::FromStr;

/// 目标URL
pub const ENV_URL: &str = "INPUT_URL";
/// 最大尝试次数
pub const ENV_MAX_TRIALS: &str = "INPUT_MAX-FREE-TRIALS";
/// 重试间隔（秒）
pub const ENV_DELAY: &str = "INPUT_DELAY";
/// 流水线输出文件路径
pub const ENV_GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

const KNOWN_VARS: [&str; 4] = [ENV_URL, ENV_MAX_TRIALS, ENV_DELAY, ENV_GITHUB_OUTPUT];

/// 环境变量配置加载器
///
/// 构建时一次性捕获所需的变量，之后的读取不再访问进程环境。
#[derive(Debug, Clone, Default)]
pub struct EnvConfigLoader {
    /// 环境变量缓存
    env_cache: HashMap<String, String>,
}

impl EnvConfigLoader {
    /// 从当前进程环境创建加载器
    ///
    /// 变量值不是有效的UTF-8时返回配置错误，而不是当作未设置。
    pub fn from_env() -> Result<Self> {
        let mut env_cache = HashMap::new();
        for name in KNOWN_VARS {
            if let Some(value) = Self::read_var(name, std::env::var(name))? {
                env_cache.insert(name.to_string(), value);
            }
        }
        Ok(Self { env_cache })
    }

    fn read_var(
        name: &str,
        value: std::result::Result<String, VarError>,
    ) -> Result<Option<String>> {
        match value {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
                name: name.to_string(),
                value: raw.to_string_lossy().into_owned(),
                reason: "不是有效的UTF-8".to_string(),
            }
            .into()),
        }
    }

    /// 从给定的键值对创建加载器
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env_cache = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { env_cache }
    }

    /// 加载探测配置
    ///
    /// 空字符串与未设置等价，使用默认值。
    ///
    /// # 返回
    /// * `Result<ProbeConfig>` - 加载的配置或错误
    pub fn load(&self) -> Result<ProbeConfig> {
        let url = self
            .get(ENV_URL)
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let max_trials = self.parse_number(ENV_MAX_TRIALS, DEFAULT_MAX_TRIALS)?;
        let delay_seconds = self.parse_number(ENV_DELAY, DEFAULT_DELAY_SECONDS)?;

        let config = ProbeConfig::new(url, max_trials, delay_seconds);
        validate_config(&config).map_err(ConfigError::ValidationError)?;

        tracing::debug!("从环境变量加载配置: {:?}", config);
        Ok(config)
    }

    /// 流水线输出文件路径
    pub fn output_path(&self) -> Option<PathBuf> {
        self.get(ENV_GITHUB_OUTPUT).map(PathBuf::from)
    }

    /// 读取变量，去除首尾空白，空值视为未设置
    fn get(&self, name: &str) -> Option<&str> {
        self.env_cache
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn parse_number<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|e| {
                PingUrlError::from(ConfigError::InvalidValue {
                    name: name.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                })
            }),
        }
    }
}
