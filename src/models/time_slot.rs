// 取货时段数据模型
// 每个时段是一个每日重复的取货窗口，附带最大接单量和启用开关

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// 取货时段模型
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// 时段唯一标识符
    pub id: Uuid,
    /// 所属店铺ID
    pub store_id: Uuid,
    /// 开始时间 "HH:MM"
    pub start_time: String,
    /// 结束时间 "HH:MM"
    pub end_time: String,
    /// 最大接单量 (仅供展示，不在服务端强制)
    pub max_orders: i32,
    /// 是否启用 (商家手动开关，与容量无关)
    pub is_active: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 带订单数的时段视图
///
/// GET /timeslots 中 orderCount 统计当日未取消订单;
/// GET /store 中统计该时段的累计订单
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotWithCount {
    #[serde(flatten)]
    pub time_slot: TimeSlot,
    /// 订单数
    pub order_count: i64,
}

/// 创建时段请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeSlotRequest {
    pub start_time: String,
    pub end_time: String,
    pub max_orders: i32,
    /// 缺省为启用
    pub is_active: Option<bool>,
}

/// 更新时段请求 (浅合并，也用于 isActive 开关)
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeSlotRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub max_orders: Option<i32>,
    pub is_active: Option<bool>,
}

impl TimeSlot {
    /// 从创建请求构造新时段
    pub fn from_request(store_id: Uuid, request: CreateTimeSlotRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            store_id,
            start_time: request.start_time,
            end_time: request.end_time,
            max_orders: request.max_orders,
            is_active: request.is_active.unwrap_or(true),
            created_at: Utc::now(),
        }
    }

    /// 应用更新请求，未出现的字段保持原值
    pub fn apply_update(&mut self, update: UpdateTimeSlotRequest) {
        if let Some(start_time) = update.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            self.end_time = end_time;
        }
        if let Some(max_orders) = update.max_orders {
            self.max_orders = max_orders;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_defaults_to_active() {
        let slot = TimeSlot::from_request(
            Uuid::new_v4(),
            CreateTimeSlotRequest {
                start_time: "17:30".to_string(),
                end_time: "18:30".to_string(),
                max_orders: 15,
                is_active: None,
            },
        );
        assert!(slot.is_active);
        assert_eq!(slot.max_orders, 15);
    }

    #[test]
    fn test_apply_update_toggles_active_only() {
        let mut slot = TimeSlot::from_request(
            Uuid::new_v4(),
            CreateTimeSlotRequest {
                start_time: "19:00".to_string(),
                end_time: "20:00".to_string(),
                max_orders: 15,
                is_active: Some(true),
            },
        );
        slot.apply_update(UpdateTimeSlotRequest {
            is_active: Some(false),
            ..Default::default()
        });

        assert!(!slot.is_active);
        assert_eq!(slot.start_time, "19:00");
        assert_eq!(slot.max_orders, 15);
    }

    #[test]
    fn test_with_count_flattens_slot_fields() {
        let slot = TimeSlot::from_request(
            Uuid::new_v4(),
            CreateTimeSlotRequest {
                start_time: "17:30".to_string(),
                end_time: "18:30".to_string(),
                max_orders: 15,
                is_active: Some(true),
            },
        );
        let value = serde_json::to_value(TimeSlotWithCount {
            time_slot: slot,
            order_count: 3,
        })
        .unwrap();

        assert_eq!(value["orderCount"], 3);
        assert_eq!(value["startTime"], "17:30");
        assert_eq!(value["maxOrders"], 15);
    }
}
