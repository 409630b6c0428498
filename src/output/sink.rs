//! 输出文件写入实现
//!
//! 以追加方式向运行器提供的输出文件写入 `key=value` 行

use crate::error::{OutputError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// 流水线输出目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubOutput {
    /// 输出文件路径，为空时写到标准输出
    path: Option<PathBuf>,
}

impl GithubOutput {
    /// 写入指定文件
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// 写入标准输出（本地运行时没有输出文件）
    pub fn stdout() -> Self {
        Self { path: None }
    }

    /// 根据可选路径创建
    pub fn from_path(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// 输出文件路径
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 写入一个输出项
    ///
    /// # 参数
    /// * `key` - 输出名
    /// * `value` - 输出值
    ///
    /// # 返回
    /// * `Result<()>` - 写入结果
    pub fn emit(&self, key: &str, value: &str) -> Result<()> {
        match &self.path {
            Some(path) => emit_output(path, key, value),
            None => {
                let entry = format_entry(key, value)?;
                print!("{entry}");
                Ok(())
            }
        }
    }
}

/// 向输出文件追加一个输出项
///
/// 文件不存在时会被创建，已有内容不会被截断。
///
/// # 参数
/// * `path` - 输出文件路径
/// * `key` - 输出名
/// * `value` - 输出值
///
/// # 返回
/// * `Result<()>` - 写入结果
pub fn emit_output(path: impl AsRef<Path>, key: &str, value: &str) -> Result<()> {
    let path = path.as_ref();
    let entry = format_entry(key, value)?;

    let write_error = |source| OutputError::Write {
        path: path.display().to_string(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_error)?;
    file.write_all(entry.as_bytes()).map_err(write_error)?;

    tracing::debug!("写入输出 {}={} 到 {}", key, value, path.display());
    Ok(())
}

/// 格式化一个输出项
///
/// 单行值写成 `key=value\n`；多行值使用 heredoc 形式，
/// 分隔符随机生成且保证不出现在值中。
pub fn format_entry(key: &str, value: &str) -> Result<String> {
    if key.is_empty() || key.contains('=') || key.contains('\n') || key.contains('\r') {
        return Err(OutputError::InvalidKey {
            key: key.to_string(),
        }
        .into());
    }

    if !value.contains('\n') && !value.contains('\r') {
        return Ok(format!("{key}={value}\n"));
    }

    let delimiter = loop {
        let candidate = format!("ghadelimiter_{}", Uuid::new_v4());
        if !value.contains(&candidate) {
            break candidate;
        }
    };

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}
