//! Result filters applied to trades before they are shown.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::numeric::{parse_numeric, strip_percent};
use super::trades::{Security, Trade};

/// Numeric trade field used to rank trades before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSortKey {
    TotalProfit,
    UnitProfit,
    IskPerMinute,
    Volume,
    BuyPrice,
    SellPrice,
}

impl TradeSortKey {
    fn value(self, trade: &Trade) -> f64 {
        match self {
            TradeSortKey::TotalProfit => trade.total_profit,
            TradeSortKey::UnitProfit => trade.unit_profit,
            TradeSortKey::IskPerMinute => trade.isk_per_minute,
            TradeSortKey::Volume => trade.volume as f64,
            TradeSortKey::BuyPrice => trade.buy_price,
            TradeSortKey::SellPrice => trade.sell_price,
        }
    }
}

impl fmt::Display for TradeSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TradeSortKey::TotalProfit => "total_profit",
            TradeSortKey::UnitProfit => "unit_profit",
            TradeSortKey::IskPerMinute => "isk_per_minute",
            TradeSortKey::Volume => "volume",
            TradeSortKey::BuyPrice => "buy_price",
            TradeSortKey::SellPrice => "sell_price",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key {0:?}")]
pub struct InvalidSortKey(String);

impl FromStr for TradeSortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total_profit" => Ok(TradeSortKey::TotalProfit),
            "unit_profit" => Ok(TradeSortKey::UnitProfit),
            "isk_per_minute" => Ok(TradeSortKey::IskPerMinute),
            "volume" => Ok(TradeSortKey::Volume),
            "buy_price" => Ok(TradeSortKey::BuyPrice),
            "sell_price" => Ok(TradeSortKey::SellPrice),
            _ => Err(InvalidSortKey(s.to_string())),
        }
    }
}

/// Thresholds deciding which trades are worth showing.
#[derive(Debug, Clone)]
pub struct TradeFilter {
    /// Minimum total profit (ISK).
    pub min_profit: f64,
    /// Minimum margin as a fraction (0.15 = 15%).
    pub min_margin: f64,
    /// Source station security must be strictly above this.
    /// `0.0` disables the check, including for unknown security.
    pub security_filter: f64,
    /// Ranking applied before truncation, highest first.
    pub sort_by: TradeSortKey,
    /// Maximum number of trades kept.
    pub limit: usize,
}

impl TradeFilter {
    pub fn with_min_profit(mut self, min_profit: f64) -> Self {
        self.min_profit = min_profit;
        self
    }

    pub fn with_min_margin(mut self, min_margin: f64) -> Self {
        self.min_margin = min_margin;
        self
    }

    pub fn with_security_filter(mut self, security_filter: f64) -> Self {
        self.security_filter = security_filter;
        self
    }

    pub fn with_sort_by(mut self, sort_by: TradeSortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn passes_security(&self, trade: &Trade) -> bool {
        if self.security_filter == 0.0 {
            return true;
        }
        security_level(trade.source_station.security.as_ref())
            .is_some_and(|level| level > self.security_filter)
    }

    fn passes_profit(&self, trade: &Trade) -> bool {
        trade.total_profit >= self.min_profit
    }

    fn passes_margin(&self, trade: &Trade) -> bool {
        margin_fraction(&trade.margin).is_some_and(|margin| margin >= self.min_margin)
    }
}

impl Default for TradeFilter {
    fn default() -> Self {
        Self {
            min_profit: 100_000.0,
            min_margin: 0.15,
            security_filter: -1.0,
            sort_by: TradeSortKey::TotalProfit,
            limit: 100,
        }
    }
}

/// Numeric security level, if the station has one.
fn security_level(security: Option<&Security>) -> Option<f64> {
    match security? {
        Security::Level(level) => Some(*level),
        Security::Label(label) => parse_numeric(label),
    }
}

/// Margin text such as `"18.2%"` as a fraction (`0.182`).
pub fn margin_fraction(margin: &str) -> Option<f64> {
    parse_numeric(&strip_percent(margin)).map(|percent| percent / 100.0)
}

/// Keep the trades that pass every threshold, ranked highest first by
/// `filter.sort_by` and truncated to `filter.limit`.
///
/// Trades whose margin does not parse are dropped.
pub fn filter_trades(trades: Vec<Trade>, filter: &TradeFilter) -> Vec<Trade> {
    let total = trades.len();
    let mut kept: Vec<Trade> = trades
        .into_iter()
        .filter(|t| filter.passes_security(t))
        .filter(|t| filter.passes_profit(t) && filter.passes_margin(t))
        .collect();

    kept.sort_by(|a, b| filter.sort_by.value(b).total_cmp(&filter.sort_by.value(a)));
    kept.truncate(filter.limit);

    debug!(total, kept = kept.len(), sort_by = %filter.sort_by, "filtered trades");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TradeStation;

    fn trade(item: &str, security: Option<Security>, total_profit: f64, margin: &str) -> Trade {
        Trade {
            item: item.to_string(),
            source_station: TradeStation {
                name: format!("{item} source"),
                security,
            },
            dest_station: TradeStation {
                name: "Jita IV - Moon 4".to_string(),
                security: Some(Security::Level(0.9)),
            },
            buy_price: 10.0,
            sell_price: 15.0,
            volume: 1000,
            unit_profit: total_profit / 1000.0,
            total_profit,
            margin: margin.to_string(),
            isk_per_minute: total_profit / 15.0,
        }
    }

    fn items(trades: &[Trade]) -> Vec<&str> {
        trades.iter().map(|t| t.item.as_str()).collect()
    }

    #[test]
    fn defaults_match_results_page() {
        let filter = TradeFilter::default();
        assert_eq!(filter.min_profit, 100_000.0);
        assert_eq!(filter.min_margin, 0.15);
        assert_eq!(filter.security_filter, -1.0);
        assert_eq!(filter.sort_by, TradeSortKey::TotalProfit);
        assert_eq!(filter.limit, 100);
    }

    #[test]
    fn security_must_be_known_and_above_threshold() {
        let trades = vec![
            trade("highsec", Some(Security::Level(0.9)), 200_000.0, "20%"),
            trade("lowsec", Some(Security::Level(0.3)), 200_000.0, "20%"),
            trade("unknown", Some(Security::Label("Unknown".into())), 200_000.0, "20%"),
            trade("missing", None, 200_000.0, "20%"),
            trade("text", Some(Security::Label("0.7".into())), 200_000.0, "20%"),
        ];
        let filter = TradeFilter::default().with_security_filter(0.5);

        let kept = filter_trades(trades, &filter);
        let mut names = items(&kept);
        names.sort_unstable();
        assert_eq!(names, vec!["highsec", "text"]);
    }

    #[test]
    fn default_security_filter_drops_unknown_security() {
        let trades = vec![
            trade("nullsec", Some(Security::Level(-0.4)), 200_000.0, "20%"),
            trade("unknown", Some(Security::Label("Unknown".into())), 200_000.0, "20%"),
        ];

        let kept = filter_trades(trades, &TradeFilter::default());
        assert_eq!(items(&kept), vec!["nullsec"]);
    }

    #[test]
    fn zero_security_filter_disables_check() {
        let trades = vec![
            trade("unknown", Some(Security::Label("Unknown".into())), 200_000.0, "20%"),
            trade("nullsec", Some(Security::Level(-0.9)), 100_000.0, "20%"),
        ];
        let filter = TradeFilter::default().with_security_filter(0.0);

        let kept = filter_trades(trades, &filter);
        assert_eq!(items(&kept), vec!["unknown", "nullsec"]);
    }

    #[test]
    fn min_profit_is_inclusive() {
        let trades = vec![
            trade("exact", Some(Security::Level(0.9)), 100_000.0, "20%"),
            trade("below", Some(Security::Level(0.9)), 99_999.99, "20%"),
        ];

        let kept = filter_trades(trades, &TradeFilter::default());
        assert_eq!(items(&kept), vec!["exact"]);
    }

    #[test]
    fn min_margin_reads_percent_text() {
        let trades = vec![
            trade("wide", Some(Security::Level(0.9)), 200_000.0, "27.3%"),
            trade("exact", Some(Security::Level(0.9)), 150_000.0, "15.0%"),
            trade("thin", Some(Security::Level(0.9)), 300_000.0, "9.9%"),
            trade("garbled", Some(Security::Level(0.9)), 400_000.0, "n/a"),
        ];

        let kept = filter_trades(trades, &TradeFilter::default());
        assert_eq!(items(&kept), vec!["wide", "exact"]);
    }

    #[test]
    fn ranks_and_truncates() {
        let trades = vec![
            trade("small", Some(Security::Level(0.9)), 150_000.0, "20%"),
            trade("large", Some(Security::Level(0.9)), 900_000.0, "20%"),
            trade("medium", Some(Security::Level(0.9)), 400_000.0, "20%"),
        ];
        let filter = TradeFilter::default().with_limit(2);

        let kept = filter_trades(trades, &filter);
        assert_eq!(items(&kept), vec!["large", "medium"]);
    }

    #[test]
    fn default_limit_keeps_top_hundred() {
        let trades: Vec<Trade> = (0..150i32)
            .map(|i| {
                trade(
                    &format!("item{i}"),
                    Some(Security::Level(0.9)),
                    100_000.0 + f64::from(i),
                    "20%",
                )
            })
            .collect();

        let kept = filter_trades(trades, &TradeFilter::default());
        assert_eq!(kept.len(), 100);
        assert_eq!(kept[0].item, "item149");
        assert_eq!(kept[99].item, "item50");
    }

    #[test]
    fn sort_key_parses_from_name() {
        assert_eq!("isk_per_minute".parse::<TradeSortKey>(), Ok(TradeSortKey::IskPerMinute));
        assert_eq!(TradeSortKey::Volume.to_string(), "volume");
        assert!("margin".parse::<TradeSortKey>().is_err());
    }

    #[test]
    fn margin_fraction_strips_percent() {
        assert_eq!(margin_fraction("12.5%"), Some(0.125));
        assert_eq!(margin_fraction("-3%"), Some(-0.03));
        assert_eq!(margin_fraction("n/a"), None);
    }
}
