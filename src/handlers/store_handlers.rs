// 店铺API处理器
// 处理店铺综合视图查询和店铺资料更新等HTTP请求

use actix_web::{web, HttpResponse, Result as ActixResult};
use crate::models::{ErrorResponse, UpdateStoreRequest};
use crate::services::StoreService;
use crate::state::AppStateData;

/// 获取店铺综合视图
///
/// GET /store
///
/// 响应: StoreInfo (店铺资料 + 福袋设置 + 带订单数的时段 + 员工)
pub async fn get_store(data: AppStateData) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let store_service = StoreService::new(data.db_pool.clone());

    match store_service.get_store_info(store_id).await {
        Ok(info) => Ok(HttpResponse::Ok().json(info)),
        Err(e) if e.is_not_found() => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            log::error!("Failed to fetch store: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch store")))
        }
    }
}

/// 更新店铺资料
///
/// PATCH /store
///
/// 请求体: UpdateStoreRequest (浅合并，不含嵌套集合)
/// 响应: 更新后的Store
pub async fn update_store(
    data: AppStateData,
    request: web::Json<UpdateStoreRequest>,
) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let store_service = StoreService::new(data.db_pool.clone());

    match store_service.update_store(store_id, request.into_inner()).await {
        Ok(store) => Ok(HttpResponse::Ok().json(store)),
        Err(e) if e.is_not_found() => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            log::error!("Failed to update store: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update store")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_unprovisioned_store_returns_not_found() {
        let app_state = web::Data::new(AppState::new_for_test(None));
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .route("/store", web::get().to(get_store))
                .route("/store", web::patch().to(update_store)),
        )
        .await;

        let requests = vec![
            test::TestRequest::get().uri("/store").to_request(),
            test::TestRequest::patch()
                .uri("/store")
                .set_json(serde_json::json!({ "name": "다른 가게" }))
                .to_request(),
        ];

        for request in requests {
            let resp = test::call_service(&app, request).await;
            assert_eq!(resp.status(), 404);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Store not found");
        }
    }
}
