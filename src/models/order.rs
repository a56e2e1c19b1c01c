// 订单数据模型
// 订单由外部销售渠道产生，到达本系统时已是 PAID 状态；
// 商家端只做确认取货 (CONFIRMED) 和取消 (CANCELED) 两种状态变更

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};

/// 订单状态枚举
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// 已支付，等待取货
    #[sqlx(rename = "PAID")]
    Paid,
    /// 已确认取货 (终态)
    #[sqlx(rename = "CONFIRMED")]
    Confirmed,
    /// 已取消 (终态)
    #[sqlx(rename = "CANCELED")]
    Canceled,
}

/// 订单模型
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 订单唯一标识符
    pub id: Uuid,
    /// 面向顾客的订单码
    pub order_code: String,
    /// 所属店铺ID
    pub store_id: Uuid,
    /// 取货时段ID
    pub time_slot_id: Uuid,
    /// 顾客姓名
    pub customer_name: String,
    /// 顾客电话
    pub customer_phone: Option<String>,
    /// 福袋数量
    pub quantity: i32,
    /// 总价 (整数货币单位)
    pub total_price: i32,
    /// 订单状态
    pub status: OrderStatus,
    /// 顾客评分
    pub customer_rating: Option<f64>,
    /// 顾客历史下单次数
    pub customer_order_count: Option<i32>,
    /// 取消原因 (仅 CANCELED 订单)
    pub cancel_reason: Option<String>,
    /// 取货日期
    pub pickup_date: DateTime<Utc>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 订单列表查询参数
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// 按取货时段过滤
    pub time_slot_id: Option<Uuid>,
    /// 按取货日历日过滤 (YYYY-MM-DD, 本地时区)
    pub date: Option<NaiveDate>,
}

/// 更新订单请求
///
/// PATCH /orders/{id}，确认取货发 {status: CONFIRMED}，
/// 取消发 {status: CANCELED, cancelReason}
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub status: Option<OrderStatus>,
    pub cancel_reason: Option<String>,
}

/// 订单列表响应，内嵌时段时间供客户端分组展示
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithSlot {
    #[serde(flatten)]
    pub order: Order,
    /// 所属时段的起止时间
    pub time_slot: Option<SlotTimes>,
}

/// 时段起止时间
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SlotTimes {
    pub start_time: String,
    pub end_time: String,
}

impl Order {
    /// 应用状态更新，未出现的字段保持原值
    ///
    /// 终态订单不做保护: 对 CONFIRMED/CANCELED 订单再次变更会被
    /// 静默覆盖，与上游前端只对 PAID 订单发起变更的约定一致
    pub fn apply_update(&mut self, update: UpdateOrderRequest) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(reason) = update.cancel_reason {
            self.cancel_reason = Some(reason);
        }
    }
}
