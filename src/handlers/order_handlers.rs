// 订单API处理器
// 处理订单列表查询、确认取货、取消订单等HTTP请求

use actix_web::{web, HttpResponse, Result as ActixResult};
use uuid::Uuid;
use crate::models::{ErrorResponse, OrderListQuery, UpdateOrderRequest};
use crate::services::OrderService;
use crate::state::AppStateData;

/// 查询订单列表
///
/// GET /orders?timeSlotId=&date=YYYY-MM-DD
///
/// 响应: OrderWithSlot[]
pub async fn list_orders(
    data: AppStateData,
    query: web::Query<OrderListQuery>,
) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let order_service = OrderService::new(data.db_pool.clone());

    match order_service.list_orders(store_id, query.into_inner()).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(orders)),
        Err(e) => {
            log::error!("Failed to fetch orders: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch orders")))
        }
    }
}

/// 更新订单状态
///
/// PATCH /orders/{order_id}
///
/// 请求体: UpdateOrderRequest (确认取货或带原因取消)
/// 响应: 更新后的Order
pub async fn update_order(
    data: AppStateData,
    path: web::Path<Uuid>,
    request: web::Json<UpdateOrderRequest>,
) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let order_id = path.into_inner();
    let order_service = OrderService::new(data.db_pool.clone());

    match order_service.update_order(store_id, order_id, request.into_inner()).await {
        Ok(order) => Ok(HttpResponse::Ok().json(order)),
        Err(e) if e.is_not_found() => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            log::error!("Failed to update order {}: {}", order_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update order")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::query_extractor_config;
    use crate::state::AppState;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_unprovisioned_store_returns_not_found() {
        let app_state = web::Data::new(AppState::new_for_test(None));
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .route("/orders", web::get().to(list_orders))
                .route("/orders/{order_id}", web::patch().to(update_order)),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/orders").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Store not found");

        let resp = test::call_service(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/orders/{}", Uuid::new_v4()))
                .set_json(serde_json::json!({ "status": "CONFIRMED" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Store not found");
    }

    #[actix_web::test]
    async fn test_malformed_date_query_returns_json_error() {
        let app_state = web::Data::new(AppState::new_for_test(None));
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(query_extractor_config())
                .route("/orders", web::get().to(list_orders)),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/orders?date=abc").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}
