//! 淘股吧人气股接口
//!
//! 对接 https://www.tgb.cn/new/nrnt/getNoticeStock?type=H，
//! 校验返回的 status 后按原顺序整理成 [`StockItem`] 列表

use reqwest::Client;
use serde::de::Error as _;

use super::error::{FetchError, TransportError};
use crate::models::{value_to_text, StockExtra, StockItem, TgbStockItem, TgbStockResponse};

/// 淘股吧人气股 API
pub const NOTICE_STOCK_API: &str = "https://www.tgb.cn/new/nrnt/getNoticeStock?type=H";
/// 个股详情页前缀，后接 fullCode
pub const QUOTE_URL_PREFIX: &str = "https://www.tgb.cn/quotes/";
/// info 字段中人气值的标签
const POPULARITY_LABEL: &str = "人气";
/// reason 为空时的占位文本
const NO_REASON: &str = "无说明";

/// 淘股吧数据源
///
/// 每次调用独立发起一次 GET 请求，不缓存、不重试
#[derive(Debug, Clone)]
pub struct TaogubaSource {
    client: Client,
    endpoint: String,
}

impl Default for TaogubaSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TaogubaSource {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// 使用外部构造的 HTTP 客户端（超时等设置由调用方决定）
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            endpoint: NOTICE_STOCK_API.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// 获取人气股列表
    ///
    /// 失败时先记录错误日志，再把错误原样返回给调用方
    pub async fn get_notice_stocks(&self) -> Result<Vec<StockItem>, FetchError> {
        let result = self.fetch_notice_stocks().await;
        if let Err(e) = &result {
            log::error!("获取股票数据失败: {}", e);
        }
        result
    }

    async fn fetch_notice_stocks(&self) -> Result<Vec<StockItem>, FetchError> {
        log::debug!("请求淘股吧人气股 URL: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()).into());
        }

        let body = response.bytes().await.map_err(TransportError::Request)?;
        let items = parse_notice_response(&body)?;

        log::debug!("淘股吧人气股共 {} 条", items.len());
        Ok(items)
    }
}

/// 使用默认客户端获取人气股列表
pub async fn get_notice_stocks() -> Result<Vec<StockItem>, FetchError> {
    TaogubaSource::new().get_notice_stocks().await
}

/// 解析接口响应体
///
/// 先只看外层的 status：为 false 时返回 [`FetchError::Upstream`]，
/// dto 不做任何解析；为 true 时 dto 必须存在，空列表合法
pub fn parse_notice_response(body: &[u8]) -> Result<Vec<StockItem>, FetchError> {
    let data: TgbStockResponse = serde_json::from_slice(body)?;

    if !data.status {
        return Err(FetchError::Upstream {
            code: data.error_code.filter(|c| !c.is_null()).map(value_to_text),
            message: data
                .error_message
                .filter(|m| !m.is_null())
                .map(value_to_text)
                .unwrap_or_default(),
        });
    }

    let dto = data
        .dto
        .ok_or_else(|| serde_json::Error::missing_field("dto"))?;
    let items: Vec<TgbStockItem> = serde_json::from_value(dto)?;

    Ok(items.into_iter().map(to_stock_item).collect())
}

fn to_stock_item(item: TgbStockItem) -> StockItem {
    // f64 的 Display 对整数值不带小数部分，9999.0 输出 "9999"
    let info = format!(
        "{} | {}: {}",
        item.linking_board.unwrap_or_default(),
        POPULARITY_LABEL,
        item.popular_value
    );
    let reason = item
        .reason
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| NO_REASON.to_string());

    StockItem {
        url: format!("{}{}", QUOTE_URL_PREFIX, item.full_code),
        id: item.full_code,
        title: item.stock_name,
        extra: StockExtra {
            info,
            ranking: item.ranking,
            continuenum: item.continuenum,
            reason,
        },
    }
}
