//! 淘股吧数据后端服务
//!
//! 拉取淘股吧人气股榜单，整理后以 RESTful API 的形式提供
//! 数据来源：https://www.tgb.cn

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use taoguba_backend::config::AppConfig;
use taoguba_backend::handlers;
use taoguba_backend::services::stock::TaogubaSource;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_path) = AppConfig::load()?;

    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    match config_path {
        Some(path) => log::info!("从 {} 加载配置成功", path),
        None => log::info!("未找到配置文件，使用默认配置"),
    }

    let client = config.api.build_client()?;
    let source = web::Data::new(TaogubaSource::with_client(client));

    let bind_addr = config.bind_addr();
    log::info!("启动淘股吧数据服务，监听 {}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(source.clone())
            .configure(handlers::config)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await?;
    Ok(())
}
