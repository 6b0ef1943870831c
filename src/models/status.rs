//! 市场状态模型

use serde::{Deserialize, Serialize};

/// 市场状态快照
///
/// 每次请求即时重算，不保留历史状态。
/// 时区解析失败时返回降级快照：market_open 为 false，
/// market_status 为哨兵值 "unknown"。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// 市场是否开盘
    pub market_open: bool,
    /// 市场状态："open" / "closed" / "unknown"
    pub market_status: String,
    /// 下一交易时段提示（仅供展示，不处理节假日）
    pub next_session: String,
    /// 系统是否健康（来自可注入的健康探针）
    pub system_healthy: bool,
    /// 健康检查详情
    pub health_detail: String,
    /// 快照时间（ISO 8601，交易所当地时间；降级时为 UTC）
    pub timestamp: String,
}
