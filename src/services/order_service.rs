// 订单服务
// 负责订单列表查询 (时段/日期筛选) 和订单状态变更

use sqlx::PgPool;
use uuid::Uuid;
use std::collections::HashMap;
use crate::models::{Order, OrderListQuery, OrderWithSlot, SlotTimes, TimeSlot, UpdateOrderRequest};
use crate::utils::local_day_window;
use super::ServiceError;

/// 订单服务
pub struct OrderService {
    pool: PgPool,
}

impl OrderService {
    /// 创建新的订单服务实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 查询订单列表
    ///
    /// 可按取货时段和取货日历日 (本地时区) 筛选，按创建时间倒序返回，
    /// 每条订单内嵌所属时段的起止时间
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    /// * `query` - 筛选条件
    pub async fn list_orders(
        &self,
        store_id: Uuid,
        query: OrderListQuery,
    ) -> Result<Vec<OrderWithSlot>, ServiceError> {
        let sql = build_list_sql(&query);

        let mut db_query = sqlx::query_as::<_, Order>(&sql).bind(store_id);
        if let Some(time_slot_id) = query.time_slot_id {
            db_query = db_query.bind(time_slot_id);
        }
        if let Some(date) = query.date {
            let (window_start, window_end) = local_day_window(date);
            db_query = db_query.bind(window_start).bind(window_end);
        }

        let orders = db_query.fetch_all(&self.pool).await?;

        let slots = sqlx::query_as::<_, TimeSlot>("SELECT * FROM time_slots WHERE store_id = $1")
            .bind(store_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(attach_slot_times(orders, &slots))
    }

    /// 更新订单状态
    ///
    /// 确认取货或取消 (带原因)。浅合并: 缺失字段保持原值。
    /// 终态订单不做保护，重复变更会被静默覆盖
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    /// * `order_id` - 订单ID
    /// * `update` - 状态变更请求
    pub async fn update_order(
        &self,
        store_id: Uuid,
        order_id: Uuid,
        update: UpdateOrderRequest,
    ) -> Result<Order, ServiceError> {
        let mut order =
            sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 AND store_id = $2")
                .bind(order_id)
                .bind(store_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(ServiceError::NotFound("Order"))?;

        order.apply_update(update);

        sqlx::query("UPDATE orders SET status = $2, cancel_reason = $3 WHERE id = $1")
            .bind(order.id)
            .bind(order.status)
            .bind(&order.cancel_reason)
            .execute(&self.pool)
            .await?;

        log::info!("Updated order {}: status {:?}", order.order_code, order.status);

        Ok(order)
    }
}

/// 按筛选条件拼接订单查询SQL
///
/// $1 固定为店铺ID，时段和日期窗口参数按出现顺序递增
fn build_list_sql(query: &OrderListQuery) -> String {
    let mut sql = String::from("SELECT * FROM orders WHERE store_id = $1");
    let mut param_index = 2;

    if query.time_slot_id.is_some() {
        sql.push_str(&format!(" AND time_slot_id = ${}", param_index));
        param_index += 1;
    }

    if query.date.is_some() {
        sql.push_str(&format!(
            " AND pickup_date >= ${} AND pickup_date <= ${}",
            param_index,
            param_index + 1
        ));
    }

    sql.push_str(" ORDER BY created_at DESC");
    sql
}

/// 把时段起止时间贴到订单上
///
/// 外键保证有订单的时段删不掉，这里对找不到时段的订单仍给 null
/// 而不是中断整个列表
fn attach_slot_times(orders: Vec<Order>, slots: &[TimeSlot]) -> Vec<OrderWithSlot> {
    let by_id: HashMap<Uuid, &TimeSlot> = slots.iter().map(|slot| (slot.id, slot)).collect();
    orders
        .into_iter()
        .map(|order| {
            let time_slot = by_id.get(&order.time_slot_id).map(|slot| SlotTimes {
                start_time: slot.start_time.clone(),
                end_time: slot.end_time.clone(),
            });
            OrderWithSlot { order, time_slot }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateTimeSlotRequest, OrderStatus};
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_build_list_sql_unfiltered() {
        let sql = build_list_sql(&OrderListQuery::default());
        assert_eq!(
            sql,
            "SELECT * FROM orders WHERE store_id = $1 ORDER BY created_at DESC"
        );
    }

    #[test]
    fn test_build_list_sql_with_slot_filter() {
        let sql = build_list_sql(&OrderListQuery {
            time_slot_id: Some(Uuid::new_v4()),
            date: None,
        });
        assert!(sql.contains("time_slot_id = $2"));
        assert!(!sql.contains("pickup_date"));
    }

    #[test]
    fn test_build_list_sql_with_both_filters() {
        let sql = build_list_sql(&OrderListQuery {
            time_slot_id: Some(Uuid::new_v4()),
            date: NaiveDate::from_ymd_opt(2024, 3, 15),
        });
        assert!(sql.contains("time_slot_id = $2"));
        assert!(sql.contains("pickup_date >= $3 AND pickup_date <= $4"));
        assert!(sql.ends_with("ORDER BY created_at DESC"));
    }

    #[test]
    fn test_build_list_sql_date_only_uses_second_param() {
        let sql = build_list_sql(&OrderListQuery {
            time_slot_id: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 15),
        });
        assert!(sql.contains("pickup_date >= $2 AND pickup_date <= $3"));
    }

    #[test]
    fn test_attach_slot_times_tolerates_unknown_slot() {
        let store_id = Uuid::new_v4();
        let slot = TimeSlot::from_request(
            store_id,
            CreateTimeSlotRequest {
                start_time: "17:30".to_string(),
                end_time: "18:30".to_string(),
                max_orders: 15,
                is_active: Some(true),
            },
        );

        let make_order = |slot_id| Order {
            id: Uuid::new_v4(),
            order_code: "A1234".to_string(),
            store_id,
            time_slot_id: slot_id,
            customer_name: "김철수".to_string(),
            customer_phone: None,
            quantity: 1,
            total_price: 7000,
            status: OrderStatus::Paid,
            customer_rating: None,
            customer_order_count: None,
            cancel_reason: None,
            pickup_date: Utc::now(),
            created_at: Utc::now(),
        };

        let result = attach_slot_times(
            vec![make_order(slot.id), make_order(Uuid::new_v4())],
            &[slot.clone()],
        );

        assert_eq!(result[0].time_slot.as_ref().unwrap().start_time, "17:30");
        assert!(result[1].time_slot.is_none());
    }
}
