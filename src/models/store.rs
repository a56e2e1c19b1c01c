// 店铺数据模型
// 单店铺部署: 每个运行实例只存在一行店铺记录

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use chrono::{DateTime, Utc};
use super::{LuckyBagSettings, Staff, TimeSlotWithCount};

/// 店铺模型
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// 店铺唯一标识符
    pub id: Uuid,
    /// 店铺名称
    pub name: String,
    /// 店铺介绍
    pub description: Option<String>,
    /// 地址
    pub address: Option<String>,
    /// 电话
    pub phone: Option<String>,
    /// 店铺图片URL
    pub image_url: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 更新店铺请求 (浅合并，仅覆盖出现的字段)
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

/// 店铺综合视图响应
///
/// GET /store 一次返回店铺资料、福袋设置、带订单数的时段列表和员工列表
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    #[serde(flatten)]
    pub store: Store,
    /// 福袋设置 (尚未配置时为 null)
    pub lucky_bag: Option<LuckyBagSettings>,
    /// 取货时段，带累计订单数
    pub time_slots: Vec<TimeSlotWithCount>,
    /// 员工列表
    pub staff: Vec<Staff>,
}

impl Store {
    /// 应用更新请求，未出现的字段保持原值
    pub fn apply_update(&mut self, update: UpdateStoreRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> Store {
        Store {
            id: Uuid::new_v4(),
            name: "맛있는 베이커리".to_string(),
            description: Some("동네 베이커리".to_string()),
            address: Some("서울시 강남구 테헤란로 123".to_string()),
            phone: Some("02-1234-5678".to_string()),
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_update_merges_only_present_fields() {
        let mut store = sample_store();
        store.apply_update(UpdateStoreRequest {
            phone: Some("02-9999-0000".to_string()),
            ..Default::default()
        });

        assert_eq!(store.phone.as_deref(), Some("02-9999-0000"));
        assert_eq!(store.name, "맛있는 베이커리");
        assert_eq!(store.address.as_deref(), Some("서울시 강남구 테헤란로 123"));
    }

    #[test]
    fn test_store_serializes_camel_case() {
        let value = serde_json::to_value(sample_store()).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("image_url").is_none());
    }
}
