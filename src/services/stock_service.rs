//! 股票查询服务
//!
//! 基于固定种子数据表的代码查询和衍生分类。
//! 种子表在进程启动时构建一次，运行期间只读，无需同步。

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Recommendation, StockRecord, StockView};

/// 查询失败的两种预期结果
///
/// 两者都是正常使用的分支，不是系统故障：
/// 种子表只收录七只股票，大多数真实代码都会落到 NotFound
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// 输入为空或仅含空白字符
    #[error("股票代码不能为空")]
    EmptyInput,
    /// 规范化后的代码不在种子表中
    #[error("未收录的股票代码: {0}")]
    NotFound(String),
}

/// 股票目录
///
/// 不可变的种子数据表，通过共享引用注入各处理器
pub struct StockDirectory {
    records: HashMap<String, StockRecord>,
}

fn seed(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: &str,
    market_cap: &str,
    pe_ratio: f64,
    recommendation: Recommendation,
) -> (String, StockRecord) {
    (
        symbol.to_string(),
        StockRecord {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
            volume: volume.to_string(),
            market_cap: market_cap.to_string(),
            pe_ratio,
            recommendation,
        },
    )
}

impl StockDirectory {
    /// 构建内置种子数据表（七只美股样本数据）
    pub fn with_seed_data() -> Self {
        use Recommendation::{Buy, Hold};

        let records = HashMap::from([
            seed("AAPL", "Apple Inc.", 189.42, 2.35, 1.26, "45.2M", "2.95T", 28.5, Buy),
            seed("GOOGL", "Alphabet Inc.", 142.56, -1.23, -0.85, "28.7M", "1.78T", 24.2, Hold),
            seed("MSFT", "Microsoft Corporation", 378.85, 5.67, 1.52, "32.1M", "2.81T", 31.8, Buy),
            seed("TSLA", "Tesla Inc.", 248.98, -8.45, -3.28, "67.4M", "793B", 45.7, Hold),
            seed("NVDA", "NVIDIA Corporation", 891.23, 15.78, 1.80, "41.8M", "2.20T", 65.4, Buy),
            seed("AMZN", "Amazon.com Inc.", 156.78, 3.12, 2.03, "38.9M", "1.64T", 42.1, Buy),
            seed("META", "Meta Platforms Inc.", 298.45, -2.89, -0.96, "22.6M", "756B", 23.8, Hold),
        ]);

        Self { records }
    }

    /// 查询股票代码
    ///
    /// 输入先去首尾空白，空则返回 EmptyInput；
    /// 再转大写作为查询键（" aapl " 与 "AAPL" 等价）。
    /// 命中返回带衍生分类的视图，未命中返回 NotFound（携带规范化后的代码）。
    /// 纯函数：同一输入永远得到同一输出，无副作用。
    pub fn lookup(&self, raw_input: &str) -> Result<StockView, LookupError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let symbol = trimmed.to_uppercase();
        match self.records.get(&symbol) {
            Some(record) => Ok(StockView::from_record(record)),
            None => Err(LookupError::NotFound(symbol)),
        }
    }

    /// 返回全部种子股票的视图（按代码排序）
    pub fn list(&self) -> Vec<StockView> {
        let mut views: Vec<StockView> = self.records.values().map(StockView::from_record).collect();
        views.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        views
    }

    /// 返回已收录的股票代码（按代码排序），用于未命中时的提示
    pub fn supported_symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.records.keys().cloned().collect();
        symbols.sort();
        symbols
    }
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GrowthPotential, RiskLevel, Trend, Volatility};

    /// 测试大小写和空白规范化
    #[test]
    fn test_lookup_normalization() {
        println!("\n========== 测试代码规范化 ==========");
        let directory = StockDirectory::with_seed_data();

        let inputs = vec!["AAPL", "aapl", "AaPl", " aapl ", "\tAAPL\n", "  AaPL"];
        for input in &inputs {
            let view = directory.lookup(input).unwrap();
            println!("  {:?} -> {}", input, view.symbol);
            assert_eq!(view.symbol, "AAPL");
            assert_eq!(view.price, 189.42);
        }
        println!("✅ 代码规范化测试通过！");
    }

    /// 测试空输入校验先于查表
    #[test]
    fn test_lookup_empty_input() {
        println!("\n========== 测试空输入 ==========");
        let directory = StockDirectory::with_seed_data();

        assert_eq!(directory.lookup(""), Err(LookupError::EmptyInput));
        assert_eq!(directory.lookup("   "), Err(LookupError::EmptyInput));
        assert_eq!(directory.lookup("\t\n"), Err(LookupError::EmptyInput));
        println!("✅ 空输入测试通过！");
    }

    /// 测试未收录代码
    #[test]
    fn test_lookup_not_found() {
        println!("\n========== 测试未收录代码 ==========");
        let directory = StockDirectory::with_seed_data();

        assert_eq!(
            directory.lookup("ZZZZ"),
            Err(LookupError::NotFound("ZZZZ".to_string()))
        );
        // 错误携带的是规范化后的代码
        assert_eq!(
            directory.lookup(" ibm "),
            Err(LookupError::NotFound("IBM".to_string()))
        );
        println!("✅ 未收录代码测试通过！");
    }

    /// 测试 AAPL 的衍生分类
    #[test]
    fn test_lookup_aapl_derived() {
        println!("\n========== 测试 AAPL 衍生分类 ==========");
        let directory = StockDirectory::with_seed_data();
        let view = directory.lookup("aapl").unwrap();

        println!(
            "  {} 价格 {} 涨跌幅 {:+.2}% 市盈率 {}",
            view.symbol, view.price, view.change_percent, view.pe_ratio
        );
        assert_eq!(view.symbol, "AAPL");
        assert_eq!(view.price, 189.42);
        // change +2.35 > 0 看多；|1.26| > 1 波动中；28.5 ∈ [25,40) 风险中；1.26 > 1 成长高
        assert_eq!(view.trend, Trend::Bullish);
        assert_eq!(view.volatility, Volatility::Moderate);
        assert_eq!(view.risk_level, RiskLevel::Moderate);
        assert_eq!(view.growth_potential, GrowthPotential::High);
        println!("✅ AAPL 衍生分类测试通过！");
    }

    /// 测试 TSLA 的衍生分类
    #[test]
    fn test_lookup_tsla_derived() {
        println!("\n========== 测试 TSLA 衍生分类 ==========");
        let directory = StockDirectory::with_seed_data();
        let view = directory.lookup("TSLA").unwrap();

        println!(
            "  {} 价格 {} 涨跌幅 {:+.2}% 市盈率 {}",
            view.symbol, view.price, view.change_percent, view.pe_ratio
        );
        // change -8.45 看空；|-3.28| > 3 波动高；45.7 >= 40 风险高；-3.28 <= 1 成长中
        assert_eq!(view.trend, Trend::Bearish);
        assert_eq!(view.volatility, Volatility::High);
        assert_eq!(view.risk_level, RiskLevel::High);
        assert_eq!(view.growth_potential, GrowthPotential::Moderate);
        println!("✅ TSLA 衍生分类测试通过！");
    }

    /// 测试种子表收录的代码集合
    #[test]
    fn test_supported_symbols() {
        println!("\n========== 测试种子表代码集合 ==========");
        let directory = StockDirectory::with_seed_data();
        let symbols = directory.supported_symbols();

        println!("  收录代码: {}", symbols.join(", "));
        assert_eq!(
            symbols,
            vec!["AAPL", "AMZN", "GOOGL", "META", "MSFT", "NVDA", "TSLA"]
        );
        for symbol in &symbols {
            assert!(directory.lookup(symbol).is_ok());
        }
        println!("✅ 种子表代码集合测试通过！");
    }

    /// 测试列表输出按代码排序
    #[test]
    fn test_list_sorted() {
        println!("\n========== 测试股票列表 ==========");
        let directory = StockDirectory::with_seed_data();
        let views = directory.list();

        assert_eq!(views.len(), 7);
        for pair in views.windows(2) {
            assert!(pair[0].symbol < pair[1].symbol);
        }
        println!("✅ 股票列表测试通过！");
    }

    /// 测试查询的确定性
    #[test]
    fn test_lookup_deterministic() {
        println!("\n========== 测试查询确定性 ==========");
        let directory = StockDirectory::with_seed_data();

        let first = directory.lookup("nvda").unwrap();
        let second = directory.lookup("nvda").unwrap();
        assert_eq!(first.symbol, second.symbol);
        assert_eq!(first.price, second.price);
        assert_eq!(first.trend, second.trend);
        println!("✅ 查询确定性测试通过！");
    }
}
