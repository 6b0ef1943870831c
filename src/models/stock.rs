//! 股票数据模型
//!
//! 定义股票相关的数据结构和衍生分类

use serde::{Deserialize, Serialize};

/// 投资建议
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
}

/// 价格趋势
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
}

/// 波动程度（按日涨跌幅绝对值分档）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Volatility {
    Low,
    Moderate,
    High,
}

/// 风险等级（按市盈率分档）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// 成长潜力（按日涨跌幅分档）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPotential {
    Moderate,
    High,
}

/// 股票基础记录
///
/// 种子数据，进程启动时构建一次，运行期间不可变。
/// volume 和 market_cap 是带单位后缀的展示字符串（如 "45.2M"、"2.95T"），
/// 数据源未定义后缀语法，保持原样不做数值解析。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// 股票代码（规范形式：大写）
    pub symbol: String,
    /// 公司名称
    pub name: String,
    /// 当前价格（美元）
    pub price: f64,
    /// 涨跌额
    pub change: f64,
    /// 涨跌幅（百分比）
    pub change_percent: f64,
    /// 成交量（展示字符串）
    pub volume: String,
    /// 市值（展示字符串）
    pub market_cap: String,
    /// 市盈率
    pub pe_ratio: f64,
    /// 投资建议
    pub recommendation: Recommendation,
}

impl StockRecord {
    /// 趋势：涨跌额为正则看多
    pub fn trend(&self) -> Trend {
        if self.change > 0.0 {
            Trend::Bullish
        } else {
            Trend::Bearish
        }
    }

    /// 波动程度：|涨跌幅| > 3 为高，> 1 为中，其余为低
    pub fn volatility(&self) -> Volatility {
        let magnitude = self.change_percent.abs();
        if magnitude > 3.0 {
            Volatility::High
        } else if magnitude > 1.0 {
            Volatility::Moderate
        } else {
            Volatility::Low
        }
    }

    /// 风险等级：市盈率 < 25 为低，< 40 为中，其余为高
    pub fn risk_level(&self) -> RiskLevel {
        if self.pe_ratio < 25.0 {
            RiskLevel::Low
        } else if self.pe_ratio < 40.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    /// 成长潜力：涨跌幅 > 1 为高，其余为中
    pub fn growth_potential(&self) -> GrowthPotential {
        if self.change_percent > 1.0 {
            GrowthPotential::High
        } else {
            GrowthPotential::Moderate
        }
    }
}

/// 股票查询视图
///
/// 基础记录加四项衍生分类，查询时即时计算，不落库
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockView {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: String,
    pub market_cap: String,
    pub pe_ratio: f64,
    pub recommendation: Recommendation,
    /// 趋势
    pub trend: Trend,
    /// 波动程度
    pub volatility: Volatility,
    /// 风险等级
    pub risk_level: RiskLevel,
    /// 成长潜力
    pub growth_potential: GrowthPotential,
}

impl StockView {
    /// 由基础记录生成查询视图
    pub fn from_record(record: &StockRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            price: record.price,
            change: record.change,
            change_percent: record.change_percent,
            volume: record.volume.clone(),
            market_cap: record.market_cap.clone(),
            pe_ratio: record.pe_ratio,
            recommendation: record.recommendation,
            trend: record.trend(),
            volatility: record.volatility(),
            risk_level: record.risk_level(),
            growth_potential: record.growth_potential(),
        }
    }
}

/// 股票查询参数
#[derive(Debug, Deserialize)]
pub struct StockQuery {
    /// 股票代码
    pub symbol: Option<String>,
}
