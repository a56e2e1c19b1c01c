mod config;
mod handlers;
mod middleware;
mod models;
mod routes;
mod seed;
mod services;
mod state;
mod utils;

use crate::config::Config;
use crate::middleware::{create_cors, RequestLogging};
use crate::routes::{api_routes, json_extractor_config, path_extractor_config, query_extractor_config};
use crate::services::StoreService;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use chrono::Local;
use log::{info, warn};
use sqlx::postgres::PgPoolOptions;
use std::error::Error;
use std::io;
use std::io::Write;
use std::time::Duration;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 初始化日志
    let mut log_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    log_builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.args()
            )
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e)) // 转换为 io::Result
        })
        .init();

    // 加载配置
    let config = Config::from_env()?;
    config.validate()?;

    // 初始化数据库连接池
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout))
        .idle_timeout(Duration::from_secs(config.database.idle_timeout))
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!().run(&db_pool).await?;

    // seed子命令: 写入演示数据后退出
    if std::env::args().nth(1).as_deref() == Some("seed") {
        seed::run(&db_pool).await?;
        return Ok(());
    }

    // 单店铺部署: 启动时解析一次店铺ID
    let store_id = StoreService::resolve_store_id(&db_pool).await?;
    match store_id {
        Some(id) => info!("Resolved store: {}", id),
        None => warn!("No store provisioned yet; run `luckybag seed` to create demo data"),
    }

    let bind_address = config.bind_address();
    let workers = config.server.workers;
    let app_state = web::Data::new(AppState::new(db_pool, config, store_id));

    info!("luckybag server listening on {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(json_extractor_config())
            .app_data(query_extractor_config())
            .app_data(path_extractor_config())
            .wrap(RequestLogging)
            .wrap(create_cors())
            .service(api_routes())
    })
    .bind(&bind_address)?;

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server.run().await?;

    Ok(())
}
