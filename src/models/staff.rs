// 员工数据模型
// 员工按邮箱接收接单通知，可单独开关

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// 员工角色枚举
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar")]
#[serde(rename_all = "UPPERCASE")]
pub enum StaffRole {
    /// 管理员
    #[sqlx(rename = "ADMIN")]
    Admin,
    /// 普通员工
    #[sqlx(rename = "STAFF")]
    Staff,
}

/// 员工模型
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// 员工唯一标识符
    pub id: Uuid,
    /// 所属店铺ID
    pub store_id: Uuid,
    /// 通知邮箱
    pub email: String,
    /// 角色
    pub role: StaffRole,
    /// 是否接收通知
    pub notify_enabled: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 创建员工请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffRequest {
    pub email: String,
    pub role: StaffRole,
    /// 缺省为接收通知
    pub notify_enabled: Option<bool>,
}

/// 更新员工请求 (通知开关走这里)
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffRequest {
    pub role: Option<StaffRole>,
    pub notify_enabled: Option<bool>,
}

impl Staff {
    /// 从创建请求构造新员工
    pub fn from_request(store_id: Uuid, request: CreateStaffRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            store_id,
            email: request.email,
            role: request.role,
            notify_enabled: request.notify_enabled.unwrap_or(true),
            created_at: Utc::now(),
        }
    }

    /// 应用更新请求，未出现的字段保持原值
    pub fn apply_update(&mut self, update: UpdateStaffRequest) {
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(notify_enabled) = update.notify_enabled {
            self.notify_enabled = notify_enabled;
        }
    }
}
