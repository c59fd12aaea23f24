//! 淘股吧股票数据模型
//!
//! 上游接口 getNoticeStock 的原始结构，以及整理后对外输出的条目结构

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// getNoticeStock 接口返回的外层结构
///
/// 只有 status 要求严格类型；dto 先保留为原始 JSON，
/// status 为 true 时再解析成 [`TgbStockItem`] 列表
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TgbStockResponse {
    /// true 表示数据可用
    pub status: bool,
    /// 错误码，上游有时给数字有时给字符串
    #[serde(default)]
    pub error_code: Option<Value>,
    #[serde(default)]
    pub error_message: Option<Value>,
    /// 按人气排名排好序的股票列表
    #[serde(default)]
    pub dto: Option<Value>,
    /// 服务器时间戳
    #[serde(rename = "_t", default)]
    pub server_time: Option<Value>,
}

/// 错误码、错误信息等字段转成文本，字符串原样返回
pub fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// 上游单只股票条目
///
/// `gn_list`、`remark` 等字段不参与输出，保留原样以便后续使用
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TgbStockItem {
    /// 股票代码（如 "sz000592"）
    pub full_code: String,
    /// 股票名称（如 "平潭发展"）
    pub stock_name: String,
    /// 排名
    pub ranking: i64,
    #[serde(default)]
    pub remark: Option<String>,
    /// 连续涨停天数
    pub continuenum: i64,
    #[serde(default)]
    pub stock_gn: Option<String>,
    /// 概念列表
    #[serde(default)]
    pub gn_list: Vec<GnItem>,
    /// 人气值
    pub popular_value: f64,
    #[serde(default)]
    pub rank_rate: Option<f64>,
    #[serde(default)]
    pub implied: Option<String>,
    /// 原因说明，可能为空串、null 或缺失
    #[serde(default)]
    pub reason: Option<String>,
    /// 连板情况（如 "15天11板"）
    #[serde(default)]
    pub linking_board: Option<String>,
}

/// 概念标签
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GnItem {
    #[serde(default)]
    pub ztgn_seq: Option<i64>,
    #[serde(default)]
    pub gn_name: Option<String>,
}

/// 对外输出的股票条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// 股票代码
    pub id: String,
    /// 股票详情页 URL
    pub url: String,
    /// 股票名称
    pub title: String,
    pub extra: StockExtra,
}

/// 条目附加信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockExtra {
    /// 连板情况 + 人气值
    pub info: String,
    pub ranking: i64,
    pub continuenum: i64,
    pub reason: String,
}
