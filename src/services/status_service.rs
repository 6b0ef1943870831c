//! 市场状态服务
//!
//! 由当前时刻推导美股市场开闭盘状态和系统健康状态。
//! 常规交易时段：周一至周五 09:30 - 16:00（交易所当地时间，不处理节假日）。

use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;

use crate::models::StatusSnapshot;

/// 健康检查结果
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub healthy: bool,
    pub detail: String,
}

/// 可注入的健康探针
///
/// 当前设计中没有真实的健康数据源，默认探针恒报健康。
/// 后续接入真实检查时替换探针即可，快照契约不变。
pub type HealthProbe = Arc<dyn Fn() -> HealthReport + Send + Sync>;

/// 开盘时间 09:30
fn market_open_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 30, 0).unwrap()
}

/// 收盘时间 16:00
fn market_close_time() -> NaiveTime {
    NaiveTime::from_hms_opt(16, 0, 0).unwrap()
}

/// 市场状态服务
///
/// 无内部状态，每次快照独立重算，与历史调用无关
pub struct StatusService {
    /// 交易所时区标识（IANA 格式，如 "America/New_York"）
    timezone: String,
    probe: HealthProbe,
}

impl StatusService {
    /// 创建服务，使用默认健康探针
    pub fn new(timezone: impl Into<String>) -> Self {
        Self::with_probe(
            timezone,
            Arc::new(|| HealthReport {
                healthy: true,
                detail: "All systems operational".to_string(),
            }),
        )
    }

    /// 创建服务并注入健康探针
    pub fn with_probe(timezone: impl Into<String>, probe: HealthProbe) -> Self {
        Self {
            timezone: timezone.into(),
            probe,
        }
    }

    /// 获取当前时刻的状态快照
    pub fn snapshot(&self) -> StatusSnapshot {
        self.snapshot_at(Utc::now())
    }

    /// 获取指定时刻的状态快照
    ///
    /// 时区解析失败不向调用方传播：返回降级快照
    /// （market_open 为 false，状态为哨兵值 "unknown"），
    /// 保证状态面板始终可渲染。降级只包住时区解析这一步，
    /// 其余逻辑的缺陷不会被一并吞掉。
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> StatusSnapshot {
        let health = (self.probe)();

        match self.timezone.parse::<Tz>() {
            Ok(tz) => {
                let civil = now.with_timezone(&tz);
                let open = is_market_open(&civil);
                StatusSnapshot {
                    market_open: open,
                    market_status: if open { "open" } else { "closed" }.to_string(),
                    next_session: next_session_hint(&civil),
                    system_healthy: health.healthy,
                    health_detail: health.detail,
                    timestamp: civil.to_rfc3339(),
                }
            }
            Err(e) => {
                log::warn!("时区 {} 解析失败: {}，返回降级快照", self.timezone, e);
                StatusSnapshot {
                    market_open: false,
                    market_status: "unknown".to_string(),
                    next_session: "unknown".to_string(),
                    system_healthy: health.healthy,
                    health_detail: health.detail,
                    timestamp: now.to_rfc3339(),
                }
            }
        }
    }
}

/// 是否交易日（周一至周五）
fn is_trading_day(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// 当地时间是否处于交易时段 [09:30, 16:00)
fn is_market_open(civil: &DateTime<Tz>) -> bool {
    let time = civil.time();
    is_trading_day(civil.weekday()) && time >= market_open_time() && time < market_close_time()
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// 下一交易时段提示
///
/// 开盘中提示当日收盘时间；闭市时提示下一个交易日的开盘时间
/// （交易日开盘前则是当日）。仅供展示，不处理节假日。
fn next_session_hint(civil: &DateTime<Tz>) -> String {
    if is_market_open(civil) {
        return "Closes today at 16:00 ET".to_string();
    }
    if is_trading_day(civil.weekday()) && civil.time() < market_open_time() {
        return "Opens today at 09:30 ET".to_string();
    }

    // 收盘后或周末：向后找最近的交易日
    let mut date = civil.date_naive();
    for _ in 0..7 {
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
        if is_trading_day(date.weekday()) {
            return format!("Opens {} at 09:30 ET", weekday_name(date.weekday()));
        }
    }
    "Opens next business day at 09:30 ET".to_string()
}

// ==================== 测试模块 ====================
