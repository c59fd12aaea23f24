//! 接口响应模型
//!
//! 所有 HTTP 接口共用的外层包装

use chrono::Utc;
use chrono_tz::Asia::Shanghai;
use serde::{Deserialize, Serialize};

/// 当前北京时间（RFC 3339，+08:00）
pub fn beijing_now() -> String {
    Utc::now().with_timezone(&Shanghai).to_rfc3339()
}

/// 统一 API 响应结构
///
/// - success: 请求是否成功
/// - data: 成功时的数据
/// - message: 成功为 "Success"，失败为错误描述
/// - timestamp: 响应生成时间（北京时间）
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            timestamp: beijing_now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            timestamp: beijing_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beijing_now_has_offset() {
        assert!(beijing_now().ends_with("+08:00"));
    }

    #[test]
    fn test_error_response() {
        let resp: ApiResponse<Vec<u8>> = ApiResponse::error("接口返回错误: rate limited");
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message, "接口返回错误: rate limited");
    }

    #[test]
    fn test_success_response() {
        let resp = ApiResponse::success(vec![1, 2, 3]);
        assert!(resp.success);
        assert_eq!(resp.data, Some(vec![1, 2, 3]));
        assert_eq!(resp.message, "Success");
    }
}
