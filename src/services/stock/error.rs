//! 数据源错误类型

/// HTTP 传输层错误
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// 连接失败、超时或读取响应体失败
    #[error("请求失败: {0}")]
    Request(#[from] reqwest::Error),
    /// 非 2xx 状态码
    #[error("HTTP 状态异常: {0}")]
    HttpStatus(u16),
}

/// 拉取淘股吧数据时可能出现的三类错误
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// 响应体不是预期的 JSON 结构
    #[error("响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),
    /// 接口返回 status = false
    #[error("接口返回错误: {message}")]
    Upstream { code: Option<String>, message: String },
}

impl FetchError {
    /// 上游返回的 HTTP 状态码（仅非 2xx 时存在）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Transport(TransportError::HttpStatus(code)) => Some(*code),
            FetchError::Transport(TransportError::Request(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
