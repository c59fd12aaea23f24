//! 淘股吧数据服务库
//!
//! 对外提供 [`services::stock::get_notice_stocks`]，
//! 以及 HTTP 服务用到的配置、路由和数据模型

pub mod config;   // 配置加载
pub mod handlers; // HTTP 请求处理器
pub mod models;   // 数据模型定义
pub mod services; // 业务逻辑服务
