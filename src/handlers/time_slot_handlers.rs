// 取货时段API处理器
// 处理时段列表查询、创建、编辑/开关、删除等HTTP请求

use actix_web::{web, HttpResponse, Result as ActixResult};
use uuid::Uuid;
use crate::models::{CreateTimeSlotRequest, DeleteResponse, ErrorResponse, UpdateTimeSlotRequest};
use crate::services::TimeSlotService;
use crate::state::AppStateData;

/// 查询时段列表 (附带当日接单数)
///
/// GET /timeslots
///
/// 响应: TimeSlotWithCount[]
pub async fn list_time_slots(data: AppStateData) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let slot_service = TimeSlotService::new(data.db_pool.clone());

    match slot_service.list_time_slots(store_id).await {
        Ok(slots) => Ok(HttpResponse::Ok().json(slots)),
        Err(e) => {
            log::error!("Failed to fetch time slots: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch time slots")))
        }
    }
}

/// 创建时段
///
/// POST /timeslots
///
/// 请求体: CreateTimeSlotRequest
/// 响应: 创建的TimeSlot
pub async fn create_time_slot(
    data: AppStateData,
    request: web::Json<CreateTimeSlotRequest>,
) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let slot_service = TimeSlotService::new(data.db_pool.clone());

    match slot_service.create_time_slot(store_id, request.into_inner()).await {
        Ok(slot) => Ok(HttpResponse::Ok().json(slot)),
        Err(e) => {
            log::error!("Failed to create time slot: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create time slot")))
        }
    }
}

/// 更新时段 (字段编辑与 isActive 开关共用)
///
/// PATCH /timeslots/{slot_id}
///
/// 请求体: UpdateTimeSlotRequest
/// 响应: 更新后的TimeSlot
pub async fn update_time_slot(
    data: AppStateData,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTimeSlotRequest>,
) -> ActixResult<HttpResponse> {
    let store_id = data.store_id();
    if store_id.is_none() {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
    }

    let slot_id = path.into_inner();
    let slot_service = TimeSlotService::new(data.db_pool.clone());

    match slot_service.update_time_slot(slot_id, request.into_inner()).await {
        Ok(slot) => Ok(HttpResponse::Ok().json(slot)),
        Err(e) if e.is_not_found() => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            log::error!("Failed to update time slot {}: {}", slot_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update time slot")))
        }
    }
}

/// 删除时段
///
/// DELETE /timeslots/{slot_id}
///
/// 响应: {"success": true}，时段不存在时404
pub async fn delete_time_slot(
    data: AppStateData,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let store_id = data.store_id();
    if store_id.is_none() {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
    }

    let slot_id = path.into_inner();
    let slot_service = TimeSlotService::new(data.db_pool.clone());

    match slot_service.delete_time_slot(slot_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(DeleteResponse::ok())),
        Err(e) if e.is_not_found() => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            log::error!("Failed to delete time slot {}: {}", slot_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to delete time slot")))
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
                .route("/timeslots", web::get().to(list_time_slots))
                .route("/timeslots", web::post().to(create_time_slot))
                .route("/timeslots/{slot_id}", web::patch().to(update_time_slot))
                .route("/timeslots/{slot_id}", web::delete().to(delete_time_slot)),
        )
        .await;

        let slot_id = Uuid::new_v4();
        let requests = vec![
            test::TestRequest::get().uri("/timeslots").to_request(),
            test::TestRequest::post()
                .uri("/timeslots")
                .set_json(serde_json::json!({ "startTime": "17:30", "endTime": "18:30", "maxOrders": 10 }))
                .to_request(),
            test::TestRequest::patch()
                .uri(&format!("/timeslots/{}", slot_id))
                .set_json(serde_json::json!({ "isActive": false }))
                .to_request(),
            test::TestRequest::delete()
                .uri(&format!("/timeslots/{}", slot_id))
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
