// 员工API处理器
// 处理员工列表、添加员工、单人通知开关等HTTP请求

use actix_web::{web, HttpResponse, Result as ActixResult};
use uuid::Uuid;
use crate::models::{CreateStaffRequest, ErrorResponse, UpdateStaffRequest};
use crate::services::StaffService;
use crate::state::AppStateData;

/// 查询员工列表
///
/// GET /staff
///
/// 响应: Staff[]
pub async fn list_staff(data: AppStateData) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let staff_service = StaffService::new(data.db_pool.clone());

    match staff_service.list_staff(store_id).await {
        Ok(staff) => Ok(HttpResponse::Ok().json(staff)),
        Err(e) => {
            log::error!("Failed to fetch staff: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch staff")))
        }
    }
}

/// 添加员工
///
/// POST /staff
///
/// 请求体: CreateStaffRequest
/// 响应: 创建的Staff
pub async fn create_staff(
    data: AppStateData,
    request: web::Json<CreateStaffRequest>,
) -> ActixResult<HttpResponse> {
    let store_id = match data.store_id() {
        Some(store_id) => store_id,
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
        }
    };

    let staff_service = StaffService::new(data.db_pool.clone());

    match staff_service.create_staff(store_id, request.into_inner()).await {
        Ok(staff) => Ok(HttpResponse::Ok().json(staff)),
        Err(e) => {
            log::error!("Failed to create staff: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create staff")))
        }
    }
}

/// 更新员工 (通知开关)
///
/// PATCH /staff/{staff_id}
///
/// 请求体: UpdateStaffRequest
/// 响应: 更新后的Staff
pub async fn update_staff(
    data: AppStateData,
    path: web::Path<Uuid>,
    request: web::Json<UpdateStaffRequest>,
) -> ActixResult<HttpResponse> {
    let store_id = data.store_id();
    if store_id.is_none() {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Store not found")));
    }

    let staff_id = path.into_inner();
    let staff_service = StaffService::new(data.db_pool.clone());

    match staff_service.update_staff(staff_id, request.into_inner()).await {
        Ok(staff) => Ok(HttpResponse::Ok().json(staff)),
        Err(e) if e.is_not_found() => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            log::error!("Failed to update staff {}: {}", staff_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update staff")))
        }
    }
}
