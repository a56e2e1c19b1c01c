// 福袋设置数据模型
// 每个店铺一行: 当日福袋数量与定价

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// 福袋设置模型 (与店铺一对一)
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LuckyBagSettings {
    /// 设置唯一标识符
    pub id: Uuid,
    /// 所属店铺ID
    pub store_id: Uuid,
    /// 当日福袋数量
    pub quantity: i32,
    /// 原价 (整数货币单位)
    pub original_price: i32,
    /// 售价。约定为原价的七折，由调用方计算后写入，存储层不强制
    pub sale_price: i32,
    /// 福袋内容描述
    pub description: Option<String>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 更新福袋设置请求 (浅合并)
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub quantity: Option<i32>,
    pub original_price: Option<i32>,
    pub sale_price: Option<i32>,
    pub description: Option<String>,
}

/// 定价预览查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuery {
    pub original_price: i32,
}

/// 定价预览响应: 原价 → 七折售价 → 扣除平台佣金后的到手金额
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PricingPreview {
    pub original_price: i32,
    pub sale_price: i32,
    pub net_amount: i32,
}

impl LuckyBagSettings {
    /// 应用更新请求，未出现的字段保持原值
    pub fn apply_update(&mut self, update: UpdateSettingsRequest) {
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(original_price) = update.original_price {
            self.original_price = original_price;
        }
        if let Some(sale_price) = update.sale_price {
            self.sale_price = sale_price;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        self.updated_at = Utc::now();
    }
}
