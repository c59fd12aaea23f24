//! 股票数据服务模块
//!
//! 目前只有淘股吧人气股一个数据源

pub mod error;
pub mod taoguba;

pub use error::{FetchError, TransportError};
pub use taoguba::{get_notice_stocks, parse_notice_response, TaogubaSource};
