use rust_decimal::Decimal;
use tracing::Level;

use crate::domain::Money;

/// Fixed parameters of the bank. Everything lives in memory, so there is no
/// file or environment lookup: `Config::default()` is the configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub agency: String,
    pub withdrawal_limit: Money,
    pub max_daily_withdrawals: usize,
    pub max_daily_transactions: usize,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agency: "0001".to_owned(),
            withdrawal_limit: Money(Decimal::from(500)),
            max_daily_withdrawals: 3,
            max_daily_transactions: 2,
            log_level: Level::INFO,
        }
    }
}
