// 结算API处理器
// 处理结算记录查询和汇总等HTTP请求

use actix_web::{HttpResponse, Result as ActixResult};
use crate::models::ErrorResponse;
use crate::services::SettlementService;
use crate::state::AppStateData;

/// 查询结算记录 (按日期倒序，全量)
///
/// GET /settlements
///
/// 响应: Settlement[]
pub async fn list_settlements(data: AppStateData) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let settlement_service = SettlementService::new(data.db_pool.clone());

    match settlement_service.list_settlements(store_id).await {
        Ok(settlements) => Ok(HttpResponse::Ok().json(settlements)),
        Err(e) => {
            log::error!("Failed to fetch settlements: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch settlements")))
        }
    }
}

/// 结算汇总
///
/// GET /settlements/summary
///
/// 响应: SettlementSummary (总销售额/总佣金/总到手/待打款到手)
pub async fn settlement_summary(data: AppStateData) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let settlement_service = SettlementService::new(data.db_pool.clone());

    match settlement_service.get_summary(store_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(summary)),
        Err(e) => {
            log::error!("Failed to summarize settlements: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to summarize settlements")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_unprovisioned_store_returns_not_found() {
        let app_state = web::Data::new(AppState::new_for_test(None));
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .route("/settlements", web::get().to(list_settlements))
                .route("/settlements/summary", web::get().to(settlement_summary)),
        )
        .await;

        for uri in ["/settlements", "/settlements/summary"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), 404);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Store not found");
        }
    }
}
