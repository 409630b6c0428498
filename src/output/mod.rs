//! 流水线输出模块
//!
//! 提供输出文件写入和工作流命令（注解）格式化功能

pub mod command;
pub mod sink;

// 重新导出主要类型
pub use command::{error_annotation, escape_data};
pub use sink::{emit_output, format_entry, GithubOutput};
