// 福袋设置API处理器
// 处理设置查询、更新和定价预览等HTTP请求

use actix_web::{web, HttpResponse, Result as ActixResult};
use crate::models::{ErrorResponse, PricingQuery, UpdateSettingsRequest};
use crate::services::{settings_service, SettingsService};
use crate::state::AppStateData;

/// 获取福袋设置
///
/// GET /settings
///
/// 响应: LuckyBagSettings，尚未配置时404
pub async fn get_settings(data: AppStateData) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let settings_service = SettingsService::new(data.db_pool.clone());

    match settings_service.get_settings(store_id).await {
        Ok(settings) => Ok(HttpResponse::Ok().json(settings)),
        Err(e) if e.is_not_found() => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            log::error!("Failed to fetch settings: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch settings")))
        }
    }
}

/// 更新福袋设置
///
/// PATCH /settings
///
/// 请求体: UpdateSettingsRequest (浅合并)
/// 响应: 更新后的LuckyBagSettings
pub async fn update_settings(
    data: AppStateData,
    request: web::Json<UpdateSettingsRequest>,
) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let settings_service = SettingsService::new(data.db_pool.clone());

    match settings_service.update_settings(store_id, request.into_inner()).await {
        Ok(settings) => Ok(HttpResponse::Ok().json(settings)),
        Err(e) if e.is_not_found() => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            log::error!("Failed to update settings: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update settings")))
        }
    }
}

/// 定价预览
///
/// GET /settings/pricing?originalPrice=9800
///
/// 纯计算，不读写设置行: 原价 → 七折售价 → 扣除7%佣金的到手金额
/// 响应: PricingPreview
pub async fn preview_pricing(query: web::Query<PricingQuery>) -> ActixResult<HttpResponse> {
    let preview = settings_service::pricing_preview(query.original_price);
    Ok(HttpResponse::Ok().json(preview))
}
