// 服务层模块
// 包含所有业务逻辑服务和服务层统一错误类型

pub mod store_service;
pub mod order_service;
pub mod time_slot_service;
pub mod settings_service;
pub mod settlement_service;
pub mod staff_service;

// 重新导出服务
pub use store_service::StoreService;
pub use order_service::OrderService;
pub use time_slot_service::TimeSlotService;
pub use settings_service::SettingsService;
pub use settlement_service::SettlementService;
pub use staff_service::StaffService;

use thiserror::Error;

/// 服务层错误
///
/// 两级错误分类: 记录不存在 (接口层映射为404)，
/// 其余存储层错误 (接口层记日志并映射为500)
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 部署中不存在店铺行
    #[error("Store not found")]
    StoreNotFound,
    /// 按ID定位的记录不存在
    #[error("{0} not found")]
    NotFound(&'static str),
    /// 存储层错误
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    /// 是否属于"未找到"一类 (映射为 HTTP 404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::StoreNotFound | ServiceError::NotFound(_))
    }
}
