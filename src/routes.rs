// API路由配置
// 定义所有HTTP接口的路由规则

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse, Scope};
use crate::handlers::*;
use crate::models::ErrorResponse;

/// JSON请求体解析失败时返回统一的错误格式
pub fn json_extractor_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// 查询参数解析失败时返回统一的错误格式
pub fn query_extractor_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// 路径参数解析失败时返回统一的错误格式
pub fn path_extractor_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// 业务API路由配置
pub fn api_routes() -> Scope {
    web::scope("")
        // 订单路由
        .service(order_routes())
        // 取货时段路由
        .service(time_slot_routes())
        // 福袋设置路由
        .service(settings_routes())
        // 店铺路由
        .service(store_routes())
        // 员工路由
        .service(staff_routes())
        // 结算路由
        .service(settlement_routes())
        // 健康检查
        .route("/health", web::get().to(health_check))
}

/// 订单路由
fn order_routes() -> Scope {
    web::scope("/orders")
        .route("", web::get().to(list_orders))
        .route("/{order_id}", web::patch().to(update_order))
}

/// 取货时段路由
fn time_slot_routes() -> Scope {
    web::scope("/timeslots")
        .route("", web::get().to(list_time_slots))
        .route("", web::post().to(create_time_slot))
        .route("/{slot_id}", web::patch().to(update_time_slot))
        .route("/{slot_id}", web::delete().to(delete_time_slot))
}

/// 福袋设置路由
fn settings_routes() -> Scope {
    web::scope("/settings")
        .route("/pricing", web::get().to(preview_pricing))
        .route("", web::get().to(get_settings))
        .route("", web::patch().to(update_settings))
}

/// 店铺路由
fn store_routes() -> Scope {
    web::scope("/store")
        .route("", web::get().to(get_store))
        .route("", web::patch().to(update_store))
}

/// 员工路由
fn staff_routes() -> Scope {
    web::scope("/staff")
        .route("", web::get().to(list_staff))
        .route("", web::post().to(create_staff))
        .route("/{staff_id}", web::patch().to(update_staff))
}

/// 结算路由
fn settlement_routes() -> Scope {
    web::scope("/settlements")
        .route("/summary", web::get().to(settlement_summary))
        .route("", web::get().to(list_settlements))
}
