// 取货时段服务
// 负责时段的增删改查和当日接单数统计

use sqlx::PgPool;
use uuid::Uuid;
use std::collections::HashMap;
use crate::models::{CreateTimeSlotRequest, OrderStatus, TimeSlot, TimeSlotWithCount, UpdateTimeSlotRequest};
use crate::utils::today_window;
use super::ServiceError;

/// 取货时段服务
pub struct TimeSlotService {
    pool: PgPool,
}

impl TimeSlotService {
    /// 创建新的时段服务实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 查询时段列表，附带当日接单数
    ///
    /// orderCount 只统计取货日期落在今天 (本地时区自然日) 且
    /// 未取消的订单，按开始时间升序返回。
    /// 数量只做展示，达到 maxOrders 不会拒单
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    pub async fn list_time_slots(
        &self,
        store_id: Uuid,
    ) -> Result<Vec<TimeSlotWithCount>, ServiceError> {
        let slots = sqlx::query_as::<_, TimeSlot>(
            "SELECT * FROM time_slots WHERE store_id = $1 ORDER BY start_time ASC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        let (today_start, today_end) = today_window();
        let today_orders: Vec<(Uuid, OrderStatus)> = sqlx::query_as(
            r#"
            SELECT time_slot_id, status FROM orders
            WHERE store_id = $1 AND pickup_date >= $2 AND pickup_date <= $3
            "#,
        )
        .bind(store_id)
        .bind(today_start)
        .bind(today_end)
        .fetch_all(&self.pool)
        .await?;

        let counts = count_active_orders(&today_orders);

        Ok(slots
            .into_iter()
            .map(|slot| {
                let order_count = counts.get(&slot.id).copied().unwrap_or(0);
                TimeSlotWithCount {
                    time_slot: slot,
                    order_count,
                }
            })
            .collect())
    }

    /// 创建时段
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    /// * `request` - 创建请求
    pub async fn create_time_slot(
        &self,
        store_id: Uuid,
        request: CreateTimeSlotRequest,
    ) -> Result<TimeSlot, ServiceError> {
        let slot = TimeSlot::from_request(store_id, request);

        sqlx::query(
            r#"
            INSERT INTO time_slots (id, store_id, start_time, end_time, max_orders, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(slot.id)
        .bind(slot.store_id)
        .bind(&slot.start_time)
        .bind(&slot.end_time)
        .bind(slot.max_orders)
        .bind(slot.is_active)
        .bind(slot.created_at)
        .execute(&self.pool)
        .await?;

        log::info!("Created time slot {} ({}-{})", slot.id, slot.start_time, slot.end_time);

        Ok(slot)
    }

    /// 更新时段 (字段编辑和 isActive 开关共用)
    ///
    /// # Arguments
    /// * `slot_id` - 时段ID
    /// * `update` - 更新请求，缺失字段保持原值
    pub async fn update_time_slot(
        &self,
        slot_id: Uuid,
        update: UpdateTimeSlotRequest,
    ) -> Result<TimeSlot, ServiceError> {
        let mut slot = sqlx::query_as::<_, TimeSlot>("SELECT * FROM time_slots WHERE id = $1")
            .bind(slot_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServiceError::NotFound("Time slot"))?;

        slot.apply_update(update);

        sqlx::query(
            r#"
            UPDATE time_slots
            SET start_time = $2, end_time = $3, max_orders = $4, is_active = $5
            WHERE id = $1
            "#,
        )
        .bind(slot.id)
        .bind(&slot.start_time)
        .bind(&slot.end_time)
        .bind(slot.max_orders)
        .bind(slot.is_active)
        .execute(&self.pool)
        .await?;

        Ok(slot)
    }

    /// 删除时段
    ///
    /// 时段不存在时返回 NotFound 而不是静默成功。
    /// 有订单引用的时段受外键保护 (RESTRICT)，删除报存储层错误:
    /// 订单是历史记录，不随时段消失
    ///
    /// # Arguments
    /// * `slot_id` - 时段ID
    pub async fn delete_time_slot(&self, slot_id: Uuid) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM time_slots WHERE id = $1")
            .bind(slot_id)
            .execute(&self.pool)
            .await?;

        delete_outcome(result.rows_affected())?;

        log::info!("Deleted time slot {}", slot_id);

        Ok(())
    }
}

/// 按删除影响行数判定结果: 0行说明时段不存在
fn delete_outcome(rows_affected: u64) -> Result<(), ServiceError> {
    if rows_affected == 0 {
        return Err(ServiceError::NotFound("Time slot"));
    }
    Ok(())
}

/// 统计每个时段的有效订单数，取消的订单不计入
fn count_active_orders(orders: &[(Uuid, OrderStatus)]) -> HashMap<Uuid, i64> {
    let mut counts = HashMap::new();
    for (slot_id, status) in orders {
        if *status != OrderStatus::Canceled {
            *counts.entry(*slot_id).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_excludes_canceled_orders() {
        let slot = Uuid::new_v4();
        let orders = vec![
            (slot, OrderStatus::Paid),
            (slot, OrderStatus::Confirmed),
            (slot, OrderStatus::Canceled),
        ];

        let counts = count_active_orders(&orders);
        assert_eq!(counts.get(&slot).copied(), Some(2));
    }

    #[test]
    fn test_count_groups_by_slot() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let orders = vec![
            (first, OrderStatus::Paid),
            (first, OrderStatus::Paid),
            (second, OrderStatus::Confirmed),
        ];

        let counts = count_active_orders(&orders);
        assert_eq!(counts.get(&first).copied(), Some(2));
        assert_eq!(counts.get(&second).copied(), Some(1));
    }

    #[test]
    fn test_count_is_empty_for_all_canceled() {
        let slot = Uuid::new_v4();
        let orders = vec![(slot, OrderStatus::Canceled)];
        assert!(count_active_orders(&orders).is_empty());
    }

    #[test]
    fn test_delete_outcome_maps_zero_rows_to_not_found() {
        let err = delete_outcome(0).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Time slot not found");
        assert!(delete_outcome(1).is_ok());
    }

    #[test]
    fn test_order_references_block_slot_deletion() {
        // 订单只改状态从不删除，时段外键必须拦截级联删除
        let schema = include_str!("../../migrations/20240301000000_init.sql");
        let order_slot_fk = schema
            .lines()
            .find(|line| line.contains("time_slot_id") && line.contains("REFERENCES"))
            .expect("orders table must reference time_slots");
        assert!(order_slot_fk.contains("ON DELETE RESTRICT"));
        assert!(!order_slot_fk.contains("CASCADE"));
    }
}
