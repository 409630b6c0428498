//! 单次HTTP探测实现
//!
//! 一次探测（trial）只发起一个GET请求，并把结果归类为
//! 可达、暂时失败或永久失败，由重试循环决定是否继续。

use crate::error::{ProbeError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// 单次探测的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PingOutcome {
    /// 收到HTTP 200
    Reachable,
    /// 可重试的失败：超时、连接被拒、DNS失败、非200状态码等
    Transient(String),
    /// 不可重试的失败：URL格式错误或协议不受支持
    Permanent(String),
}

/// 探测器trait，定义单次探测接口
#[async_trait]
pub trait Pinger: Send + Sync {
    /// 对目标URL发起一次探测
    ///
    /// # 参数
    /// * `url` - 目标URL
    ///
    /// # 返回
    /// * `PingOutcome` - 探测结果，传输层错误也归入结果而不是返回 `Err`
    async fn ping(&self, url: &str) -> PingOutcome;
}

/// 基于reqwest的HTTP探测器
#[derive(Debug, Clone)]
pub struct HttpPinger {
    /// HTTP客户端
    client: Client,
}

impl HttpPinger {
    /// 创建新的HTTP探测器
    ///
    /// # 参数
    /// * `timeout` - 单次请求超时，`None` 时使用客户端默认值
    ///
    /// # 返回
    /// * `Result<Self>` - 探测器实例
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProbeError::ClientBuild)?;

        Ok(Self { client })
    }

    /// 解析并检查URL
    ///
    /// 缺少协议、无法解析或协议不是 http/https 的URL都视为永久失败。
    fn parse_url(url: &str) -> std::result::Result<Url, String> {
        let parsed = Url::parse(url).map_err(|e| format!("Invalid URL {url:?}: {e}"))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(format!("Invalid URL {url:?}: unsupported scheme {scheme:?}")),
        }
    }

    /// 格式化非200响应
    fn format_status(status: StatusCode) -> String {
        format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )
    }

    /// 格式化请求错误信息，使其更加清晰易读
    fn format_request_error(error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("Request timeout: {error}")
        } else if error.is_connect() {
            format!("Connection failed: {error}")
        } else if error.is_builder() {
            format!("Invalid request: {error}")
        } else if error.is_redirect() {
            format!("Too many redirects: {error}")
        } else {
            let error_str = error.to_string();
            if error_str.contains("dns") || error_str.contains("DNS") {
                format!("DNS resolution failed: {error_str}")
            } else {
                format!("Request failed: {error_str}")
            }
        }
    }
}

#[async_trait]
impl Pinger for HttpPinger {
    async fn ping(&self, url: &str) -> PingOutcome {
        let url = match Self::parse_url(url) {
            Ok(url) => url,
            Err(reason) => return PingOutcome::Permanent(reason),
        };

        match self.client.get(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => PingOutcome::Reachable,
            Ok(response) => PingOutcome::Transient(Self::format_status(response.status())),
            Err(e) if e.is_builder() => PingOutcome::Permanent(Self::format_request_error(&e)),
            Err(e) => PingOutcome::Transient(Self::format_request_error(&e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_pinger_creation() {
        assert!(HttpPinger::new(None).is_ok());
        assert!(HttpPinger::new(Some(Duration::from_secs(10))).is_ok());
    }

    #[test]
    fn test_parse_url() {
        assert!(HttpPinger::parse_url("http://example.com").is_ok());
        assert!(HttpPinger::parse_url("https://example.com/health?x=1").is_ok());

        let err = HttpPinger::parse_url("not-a-url").unwrap_err();
        assert!(err.contains("not-a-url"));

        let err = HttpPinger::parse_url("ftp://example.com").unwrap_err();
        assert!(err.contains("unsupported scheme"));

        // 缺少协议时主机名会被当成协议
        assert!(HttpPinger::parse_url("localhost:8080").is_err());
    }

    #[test]
    fn test_format_status() {
        assert_eq!(
            HttpPinger::format_status(StatusCode::SERVICE_UNAVAILABLE),
            "HTTP 503 Service Unavailable"
        );
        assert_eq!(
            HttpPinger::format_status(StatusCode::NOT_FOUND),
            "HTTP 404 Not Found"
        );
    }

    #[tokio::test]
    async fn test_malformed_url_is_permanent() {
        let pinger = HttpPinger::new(None).unwrap();

        let outcome = pinger.ping("not-a-url").await;
        assert!(matches!(outcome, PingOutcome::Permanent(_)));

        let outcome = pinger.ping("ftp://example.com/file").await;
        assert!(matches!(outcome, PingOutcome::Permanent(_)));
    }

    #[tokio::test]
    async fn test_status_classification() {
        let mut server = mockito::Server::new_async().await;
        let ok = server
            .mock("GET", "/ok")
            .with_status(200)
            .create_async()
            .await;
        let created = server
            .mock("GET", "/created")
            .with_status(201)
            .create_async()
            .await;
        let failing = server
            .mock("GET", "/down")
            .with_status(503)
            .create_async()
            .await;

        let pinger = HttpPinger::new(Some(Duration::from_secs(5))).unwrap();

        let outcome = pinger.ping(&format!("{}/ok", server.url())).await;
        assert_eq!(outcome, PingOutcome::Reachable);

        // 只有200算成功
        let outcome = pinger.ping(&format!("{}/created", server.url())).await;
        assert_eq!(outcome, PingOutcome::Transient("HTTP 201 Created".to_string()));

        let outcome = pinger.ping(&format!("{}/down", server.url())).await;
        assert_eq!(
            outcome,
            PingOutcome::Transient("HTTP 503 Service Unavailable".to_string())
        );

        ok.assert_async().await;
        created.assert_async().await;
        failing.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_refused_is_transient() {
        // 绑定后立即释放端口，确保没有服务在监听
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let pinger = HttpPinger::new(Some(Duration::from_secs(5))).unwrap();
        let outcome = pinger.ping(&format!("http://127.0.0.1:{port}/")).await;

        match outcome {
            PingOutcome::Transient(reason) => assert!(reason.starts_with("Connection failed")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
