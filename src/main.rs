//! Stock Tracker 后端服务
//!
//! 为股票追踪前端提供 RESTful API：
//! 内置种子数据的股票查询、衍生分类和市场开闭盘状态

mod config; // 配置加载
mod handlers; // HTTP 请求处理器
mod middleware; // 中间件
mod models; // 数据模型定义
mod services; // 业务逻辑服务

use actix_web::{
    middleware::{Condition, Logger},
    web, App, HttpServer,
};
use env_logger::Env;

use crate::config::AppConfig;
use crate::middleware::ApiKeyMiddleware;
use crate::services::status_service::StatusService;
use crate::services::stock_service::StockDirectory;

/// 应用程序入口
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let (config, config_source) = AppConfig::load();

    // 初始化日志系统，RUST_LOG 环境变量优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    match &config_source {
        Some(path) => log::info!("从 {} 加载配置", path),
        None => log::info!("未找到配置文件，使用默认配置"),
    }

    // 种子数据表和状态服务在启动时构建一次，请求间共享只读引用
    let directory = web::Data::new(StockDirectory::with_seed_data());
    let status = web::Data::new(StatusService::new(config.market.timezone.clone()));

    let auth_enabled = !config.api.api_key.is_empty();
    if !auth_enabled {
        log::warn!("未配置 API Key，接口不启用认证");
    }
    let api_key = config.api.api_key.clone();

    let bind_addr = config.bind_addr();
    log::info!("启动 Stock Tracker 后端服务: {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default()) // 请求日志中间件
            .wrap(Condition::new(
                auth_enabled,
                ApiKeyMiddleware::new(api_key.clone()),
            ))
            .app_data(directory.clone())
            .app_data(status.clone())
            .configure(handlers::config) // 配置路由
    });

    let server = if config.server.workers > 0 {
        server.workers(config.server.workers)
    } else {
        server
    };

    server.bind(bind_addr)?.run().await
}
