// 工具函数模块
// 包含日历日窗口计算等通用工具

pub mod time;

// 重新导出常用函数
pub use time::*;
