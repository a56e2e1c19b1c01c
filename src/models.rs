// 福袋商家端数据模型定义
// 包含店铺、取货时段、订单、福袋设置、员工、结算等核心数据结构

mod store;
mod time_slot;
mod order;
mod settings;
mod staff;
mod settlement;

// 重新导出核心类型
pub use store::*;
pub use time_slot::*;
pub use order::*;
pub use settings::*;
pub use staff::*;
pub use settlement::*;

use serde::Serialize;

/// 统一错误响应格式 {"error": "..."}
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// 错误消息
    pub error: String,
}

impl ErrorResponse {
    /// 创建错误响应
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// 删除成功响应 {"success": true}
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    /// 创建删除成功响应
    pub fn ok() -> Self {
        Self { success: true }
    }
}
