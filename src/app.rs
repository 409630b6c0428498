//! 应用程序核心逻辑
//!
//! 组装配置、执行探测、写入流水线输出并决定进程退出状态

use crate::cli::args::{Args, OutputFormat};
use crate::config::{validate_config, EnvConfigLoader, ProbeConfig};
use crate::error::{ConfigError, PingUrlError, Result};
use crate::output::GithubOutput;
use crate::probe::{Pinger, ProbeReport, Prober};
use tracing::{info, warn};

/// 写入流水线输出的键
pub const OUTPUT_KEY: &str = "success";

/// 合并环境变量和命令行参数，得到最终配置和输出目标
///
/// # 参数
/// * `args` - 命令行参数
/// * `loader` - 环境变量加载器
///
/// # 返回
/// * `Result<(ProbeConfig, GithubOutput)>` - 探测配置和输出目标
pub fn resolve_config(
    args: &Args,
    loader: &EnvConfigLoader,
) -> Result<(ProbeConfig, GithubOutput)> {
    let config = args.apply_overrides(loader.load()?);
    validate_config(&config).map_err(ConfigError::ValidationError)?;

    let output_path = args.output.clone().or_else(|| loader.output_path());
    if output_path.is_none() {
        warn!("未设置 GITHUB_OUTPUT，输出将写到标准输出");
    }

    Ok((config, GithubOutput::from_path(output_path)))
}

/// 执行探测并写入输出
///
/// 无论是否可达都会写入 `success=true|false`，不可达本身不作为错误返回。
pub async fn run_action<P: Pinger>(
    prober: &Prober<P>,
    output: &GithubOutput,
) -> Result<ProbeReport> {
    let report = prober.run().await;
    output.emit(OUTPUT_KEY, report.output_value())?;

    info!(
        "探测结束: reachable={}, attempts={}, elapsed={}ms",
        report.reachable,
        report.attempts,
        report.elapsed.as_millis()
    );
    Ok(report)
}

/// 不可达时转换为进程级错误
pub fn ensure_reachable(report: &ProbeReport, max_trials: u32) -> Result<()> {
    if report.reachable {
        Ok(())
    } else {
        Err(PingUrlError::Unreachable {
            url: report.url.clone(),
            max_trials,
        })
    }
}

/// 按输出格式渲染结论
pub fn render_report(
    report: &ProbeReport,
    format: OutputFormat,
    max_trials: u32,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(report.to_json()?),
        OutputFormat::Text => Ok(report.summary(max_trials)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_resolve_from_env() {
        let args = Args::try_parse_from(["ping-url"]).unwrap();
        let loader = EnvConfigLoader::from_vars([
            ("INPUT_URL", "https://example.org"),
            ("GITHUB_OUTPUT", "/tmp/output"),
        ]);

        let (config, output) = resolve_config(&args, &loader).unwrap();
        assert_eq!(config.url, "https://example.org");
        assert_eq!(config.max_trials, 10);
        assert_eq!(output, GithubOutput::file("/tmp/output"));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let args =
            Args::try_parse_from(["ping-url", "--output", "/tmp/cli", "--url", "http://cli"])
                .unwrap();
        let loader = EnvConfigLoader::from_vars([
            ("INPUT_URL", "https://example.org"),
            ("GITHUB_OUTPUT", "/tmp/output"),
        ]);

        let (config, output) = resolve_config(&args, &loader).unwrap();
        assert_eq!(config.url, "http://cli");
        assert_eq!(output, GithubOutput::file("/tmp/cli"));
    }

    #[test]
    fn test_resolve_without_output_path() {
        let args = Args::try_parse_from(["ping-url"]).unwrap();
        let loader = EnvConfigLoader::default();

        let (_, output) = resolve_config(&args, &loader).unwrap();
        assert_eq!(output, GithubOutput::stdout());
    }

    #[test]
    fn test_resolve_rejects_invalid_env() {
        let args = Args::try_parse_from(["ping-url"]).unwrap();
        let loader = EnvConfigLoader::from_vars([("INPUT_DELAY", "soon")]);

        assert!(matches!(
            resolve_config(&args, &loader),
            Err(PingUrlError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_zero_timeout() {
        let args = Args::try_parse_from(["ping-url", "--timeout", "0"]).unwrap();
        let loader = EnvConfigLoader::default();

        assert!(matches!(
            resolve_config(&args, &loader),
            Err(PingUrlError::Config(ConfigError::ValidationError(_)))
        ));
    }

    #[test]
    fn test_ensure_reachable() {
        let mut report = ProbeReport::new("http://example.com");
        let err = ensure_reachable(&report, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Website http://example.com is not reachable after 3 attempts."
        );

        report.reachable = true;
        assert!(ensure_reachable(&report, 3).is_ok());
    }

    #[test]
    fn test_render_report() {
        let report = ProbeReport::new("http://example.com");

        let text = render_report(&report, OutputFormat::Text, 2).unwrap();
        assert!(text.contains("not reachable after 2 attempts"));

        let json = render_report(&report, OutputFormat::Json, 2).unwrap();
        assert!(json.contains("\"reachable\": false"));
    }
}
