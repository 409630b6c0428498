//! 工作流命令格式化
//!
//! 运行器会解析标准输出中形如 `::error::message` 的行并生成注解

/// 转义工作流命令中的消息内容
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// 生成错误注解命令
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("plain"), "plain");
        assert_eq!(escape_data("100%"), "100%25");
        assert_eq!(escape_data("a\r\nb"), "a%0D%0Ab");
    }

    #[test]
    fn test_error_annotation() {
        assert_eq!(
            error_annotation("Website http://example.com is not reachable after 3 attempts."),
            "::error::Website http://example.com is not reachable after 3 attempts."
        );
        assert_eq!(error_annotation("two\nlines"), "::error::two%0Alines");
    }
}
