//! 业务逻辑服务模块
//!
//! 封装股票查询和市场状态计算逻辑

pub mod status_service; // 市场状态服务
pub mod stock_service; // 股票查询服务
