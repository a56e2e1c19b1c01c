// API处理器模块
// 包含所有HTTP请求处理逻辑

pub mod order_handlers;
pub mod time_slot_handlers;
pub mod settings_handlers;
pub mod store_handlers;
pub mod staff_handlers;
pub mod settlement_handlers;
pub mod health_handlers;

// 重新导出处理器
pub use order_handlers::*;
pub use time_slot_handlers::*;
pub use settings_handlers::*;
pub use store_handlers::*;
pub use staff_handlers::*;
pub use settlement_handlers::*;
pub use health_handlers::*;
