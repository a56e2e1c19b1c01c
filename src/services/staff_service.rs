// 员工服务
// 负责员工列表、添加员工和单人通知开关

use sqlx::PgPool;
use uuid::Uuid;
use crate::models::{CreateStaffRequest, Staff, UpdateStaffRequest};
use super::ServiceError;

/// 员工服务
pub struct StaffService {
    pool: PgPool,
}

impl StaffService {
    /// 创建新的员工服务实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 查询员工列表，按加入时间升序
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    pub async fn list_staff(&self, store_id: Uuid) -> Result<Vec<Staff>, ServiceError> {
        let staff = sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE store_id = $1 ORDER BY created_at ASC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(staff)
    }

    /// 添加员工
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    /// * `request` - 创建请求
    pub async fn create_staff(
        &self,
        store_id: Uuid,
        request: CreateStaffRequest,
    ) -> Result<Staff, ServiceError> {
        let staff = Staff::from_request(store_id, request);

        sqlx::query(
            r#"
            INSERT INTO staff (id, store_id, email, role, notify_enabled, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(staff.id)
        .bind(staff.store_id)
        .bind(&staff.email)
        .bind(staff.role)
        .bind(staff.notify_enabled)
        .bind(staff.created_at)
        .execute(&self.pool)
        .await?;

        log::info!("Created staff {} ({:?})", staff.email, staff.role);

        Ok(staff)
    }

    /// 更新员工 (通知开关和角色调整，逐人操作，无批量)
    ///
    /// # Arguments
    /// * `staff_id` - 员工ID
    /// * `update` - 更新请求，缺失字段保持原值
    pub async fn update_staff(
        &self,
        staff_id: Uuid,
        update: UpdateStaffRequest,
    ) -> Result<Staff, ServiceError> {
        let mut staff = sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
            .bind(staff_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServiceError::NotFound("Staff"))?;

        staff.apply_update(update);

        sqlx::query("UPDATE staff SET role = $2, notify_enabled = $3 WHERE id = $1")
            .bind(staff.id)
            .bind(staff.role)
            .bind(staff.notify_enabled)
            .execute(&self.pool)
            .await?;

        Ok(staff)
    }
}
