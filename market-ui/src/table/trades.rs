//! Trade records and their projection into the trade table.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::TableError;
use super::model::{Row, Table};

/// Header labels of the trade table, in column order.
pub const TRADE_COLUMNS: [&str; 10] = [
    "Item",
    "Source",
    "Destination",
    "Buy Price",
    "Sell Price",
    "Volume",
    "Unit Profit",
    "Total Profit",
    "Margin",
    "ISK/min",
];

/// Station security status: a numeric level, or a label such as `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Security {
    Level(f64),
    Label(String),
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Security::Level(level) => write!(f, "{level:.1}"),
            Security::Label(label) => f.write_str(label),
        }
    }
}

/// Station as embedded in a trade record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeStation {
    pub name: String,
    #[serde(default)]
    pub security: Option<Security>,
}

impl TradeStation {
    /// Name with the security status appended, e.g. `Jita IV - Moon 4 (0.9)`.
    pub fn display_name(&self) -> String {
        match &self.security {
            Some(security) => format!("{} ({})", self.name, security),
            None => self.name.clone(),
        }
    }
}

/// One arbitrage opportunity: buy at the source, haul, sell at the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub item: String,
    pub source_station: TradeStation,
    pub dest_station: TradeStation,
    /// Price paid at the source (best sell order)
    pub buy_price: f64,
    /// Price received at the destination (best buy order)
    pub sell_price: f64,
    pub volume: u64,
    pub unit_profit: f64,
    pub total_profit: f64,
    /// Already formatted, e.g. `"18.2%"`
    pub margin: String,
    pub isk_per_minute: f64,
}

impl Trade {
    fn to_row(&self) -> Row {
        Row::new([
            self.item.clone(),
            self.source_station.display_name(),
            self.dest_station.display_name(),
            format!("{:.2}", self.buy_price),
            format!("{:.2}", self.sell_price),
            self.volume.to_string(),
            format!("{:.2}", self.unit_profit),
            format!("{:.2}", self.total_profit),
            self.margin.clone(),
            format!("{:.2}", self.isk_per_minute),
        ])
    }
}

/// Build the trade table (header plus one row per trade, in input order).
pub fn trades_table(trades: &[Trade]) -> Table {
    Table::new(
        Row::new(TRADE_COLUMNS),
        trades.iter().map(Trade::to_row).collect(),
    )
}

/// Load a JSON array of trades from a file.
pub fn load_trades(path: impl AsRef<Path>) -> Result<Vec<Trade>, TableError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| TableError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&json).map_err(|e| TableError::Json {
        message: e.to_string(),
    })
}
