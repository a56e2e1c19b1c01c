// 店铺服务
// 负责单店铺解析、店铺综合视图查询和店铺资料更新

use sqlx::PgPool;
use uuid::Uuid;
use std::collections::HashMap;
use crate::models::{Store, StoreInfo, TimeSlot, TimeSlotWithCount, LuckyBagSettings, Staff, UpdateStoreRequest};
use super::ServiceError;

/// 店铺服务
pub struct StoreService {
    pool: PgPool,
}

impl StoreService {
    /// 创建新的店铺服务实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 启动时解析单店铺ID
    ///
    /// 单店铺部署假设: 取表中第一行。部署未初始化时返回 None，
    /// 之后所有请求统一走 404 路径
    pub async fn resolve_store_id(pool: &PgPool) -> Result<Option<Uuid>, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM stores ORDER BY created_at LIMIT 1")
            .fetch_optional(pool)
            .await
    }

    /// 获取店铺综合视图
    ///
    /// 一次返回店铺资料、福袋设置、带累计订单数的时段列表和员工列表。
    /// 这里的时段订单数是该时段的历史总量，与 /timeslots 的当日数口径不同
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    pub async fn get_store_info(&self, store_id: Uuid) -> Result<StoreInfo, ServiceError> {
        let store = self.fetch_store(store_id).await?;

        let lucky_bag = sqlx::query_as::<_, LuckyBagSettings>(
            "SELECT * FROM lucky_bag_settings WHERE store_id = $1",
        )
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        let slots = sqlx::query_as::<_, TimeSlot>(
            "SELECT * FROM time_slots WHERE store_id = $1 ORDER BY start_time ASC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        let counts: Vec<(Uuid, i64)> = sqlx::query_as(
            "SELECT time_slot_id, COUNT(*) FROM orders WHERE store_id = $1 GROUP BY time_slot_id",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        let staff = sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE store_id = $1 ORDER BY created_at ASC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(StoreInfo {
            store,
            lucky_bag,
            time_slots: attach_counts(slots, &counts),
            staff,
        })
    }

    /// 更新店铺资料 (浅合并)
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    /// * `update` - 更新请求，缺失字段保持原值
    pub async fn update_store(
        &self,
        store_id: Uuid,
        update: UpdateStoreRequest,
    ) -> Result<Store, ServiceError> {
        let mut store = self.fetch_store(store_id).await?;
        store.apply_update(update);

        sqlx::query(
            r#"
            UPDATE stores
            SET name = $2, description = $3, address = $4, phone = $5,
                image_url = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(store.id)
        .bind(&store.name)
        .bind(&store.description)
        .bind(&store.address)
        .bind(&store.phone)
        .bind(&store.image_url)
        .bind(store.updated_at)
        .execute(&self.pool)
        .await?;

        log::info!("Updated store profile: {}", store.id);

        Ok(store)
    }

    async fn fetch_store(&self, store_id: Uuid) -> Result<Store, ServiceError> {
        sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = $1")
            .bind(store_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServiceError::StoreNotFound)
    }
}

/// 把每时段订单数贴到时段列表上，没有订单的时段计为0
fn attach_counts(slots: Vec<TimeSlot>, counts: &[(Uuid, i64)]) -> Vec<TimeSlotWithCount> {
    let by_slot: HashMap<Uuid, i64> = counts.iter().copied().collect();
    slots
        .into_iter()
        .map(|slot| {
            let order_count = by_slot.get(&slot.id).copied().unwrap_or(0);
            TimeSlotWithCount {
                time_slot: slot,
                order_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateTimeSlotRequest;

    fn slot(store_id: Uuid, start: &str) -> TimeSlot {
        TimeSlot::from_request(
            store_id,
            CreateTimeSlotRequest {
                start_time: start.to_string(),
                end_time: "20:00".to_string(),
                max_orders: 15,
                is_active: Some(true),
            },
        )
    }

    #[test]
    fn test_attach_counts_defaults_to_zero() {
        let store_id = Uuid::new_v4();
        let first = slot(store_id, "17:30");
        let second = slot(store_id, "19:00");
        let counts = vec![(first.id, 4_i64)];

        let result = attach_counts(vec![first.clone(), second.clone()], &counts);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].order_count, 4);
        assert_eq!(result[1].order_count, 0);
        assert_eq!(result[0].time_slot.id, first.id);
    }
}
