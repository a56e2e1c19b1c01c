// 结算数据模型
// 结算行由平台侧的打款流程产生，本系统只读展示

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// 结算状态枚举
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar")]
#[serde(rename_all = "UPPERCASE")]
pub enum SettlementStatus {
    /// 待打款
    #[sqlx(rename = "PENDING")]
    Pending,
    /// 已打款
    #[sqlx(rename = "COMPLETED")]
    Completed,
}

/// 按日结算记录模型
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// 结算唯一标识符
    pub id: Uuid,
    /// 所属店铺ID
    pub store_id: Uuid,
    /// 结算日期
    pub date: DateTime<Utc>,
    /// 当日订单数
    pub total_orders: i32,
    /// 当日销售总额
    pub total_amount: i32,
    /// 平台佣金
    pub commission: i32,
    /// 到手金额 (约定 totalAmount - commission，存储层不强制)
    pub net_amount: i32,
    /// 结算状态
    pub status: SettlementStatus,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 结算汇总响应
///
/// 对全部结算记录求和: 总销售额、总佣金、总到手金额，
/// 以及尚未打款部分的到手金额
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    pub total_amount: i64,
    pub total_commission: i64,
    pub total_net: i64,
    pub pending_amount: i64,
}
