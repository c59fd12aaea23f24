//! 股票接口处理器
//!
//! - GET /stocks/notice - 淘股吧人气股列表

use actix_web::{web, HttpResponse, Result};
use crate::models::{ApiResponse, StockItem};
use crate::services::stock::{FetchError, TaogubaSource};

pub async fn get_notice_stocks(source: web::Data<TaogubaSource>) -> Result<HttpResponse> {
    match source.get_notice_stocks().await {
        Ok(items) => {
            let response = ApiResponse::success(items);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            let response = ApiResponse::<Vec<StockItem>>::error(e.to_string());
            Ok(error_response(&e).json(response))
        }
    }
}

/// 上游返回非 2xx 时回 502，其余失败回 500
fn error_response(e: &FetchError) -> actix_web::HttpResponseBuilder {
    match e.status_code() {
        Some(_) => HttpResponse::BadGateway(),
        None => HttpResponse::InternalServerError(),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stocks")
            .route("/notice", web::get().to(get_notice_stocks))
    );
}
