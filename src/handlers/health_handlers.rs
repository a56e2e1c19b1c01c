// 健康检查API处理器
// 提供存活探针，顺带报告数据库连接状态

use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;
use crate::state::AppStateData;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 版本信息
    pub version: String,
    /// 数据库连接状态
    pub database: String,
    /// 当前时间戳
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// 基础健康检查
///
/// GET /health
///
/// 响应: HealthResponse，数据库不可用时503
pub async fn health_check(data: AppStateData) -> ActixResult<HttpResponse> {
    let mut health = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: "connected".to_string(),
        timestamp: chrono::Utc::now(),
    };

    if let Err(e) = sqlx::query("SELECT 1").fetch_one(&data.db_pool).await {
        log::error!("Database health check failed: {}", e);
        health.database = "disconnected".to_string();
        health.status = "unhealthy".to_string();
        return Ok(HttpResponse::ServiceUnavailable().json(health));
    }

    Ok(HttpResponse::Ok().json(health))
}
