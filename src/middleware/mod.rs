// 中间件模块
// 包含CORS配置和请求日志中间件

pub mod cors;
pub mod logging;

// 重新导出中间件
pub use cors::*;
pub use logging::*;
