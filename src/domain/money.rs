use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Error;

/// An amount of currency. The sign is not enforced here, accounts validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub Decimal);

impl Money {
    pub const DISPLAY_DECIMALS: u32 = 2;

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAmount);
        }

        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| Error::InvalidAmount)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut rounded = self.0.round_dp(Self::DISPLAY_DECIMALS);
        rounded.rescale(Self::DISPLAY_DECIMALS);
        write!(f, "R$ {}", rounded)
    }
}
