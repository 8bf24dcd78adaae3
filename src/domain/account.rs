use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{Error, History, Money, TransactionKind};

/// Extra withdrawal rules layered on top of the solvency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountPolicy {
    #[cfg_attr(not(test), allow(dead_code))]
    Basic,
    Current {
        withdrawal_limit: Money,
        max_daily_withdrawals: usize,
    },
}

#[derive(Debug)]
pub struct Account {
    number: u32,
    agency: String,
    owner: String, // tax id of the owning client, fixed at creation
    balance: Decimal,
    history: History,
    policy: AccountPolicy,
}

impl Account {
    pub fn new(
        number: u32,
        agency: impl Into<String>,
        owner: impl Into<String>,
        policy: AccountPolicy,
    ) -> Self {
        Self {
            number,
            agency: agency.into(),
            owner: owner.into(),
            balance: Decimal::ZERO,
            history: History::new(),
            policy,
        }
    }

    pub fn current(
        number: u32,
        agency: impl Into<String>,
        owner: impl Into<String>,
        withdrawal_limit: Money,
        max_daily_withdrawals: usize,
    ) -> Self {
        Self::new(
            number,
            agency,
            owner,
            AccountPolicy::Current {
                withdrawal_limit,
                max_daily_withdrawals,
            },
        )
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        Money(self.balance)
    }

    pub fn policy(&self) -> AccountPolicy {
        self.policy
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), Error> {
        if !amount.is_positive() {
            return Err(Error::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount.amount())
            .ok_or(Error::BalanceOverflow)?;
        Ok(())
    }

    /// Withdraws `amount`, checking the policy caps first (in order: amount
    /// cap, then the number of withdrawals already made on `today`) and the
    /// balance last.
    pub fn withdraw(&mut self, amount: Money, today: NaiveDate) -> Result<(), Error> {
        if let AccountPolicy::Current {
            withdrawal_limit,
            max_daily_withdrawals,
        } = self.policy
        {
            if amount > withdrawal_limit {
                return Err(Error::ExceedsWithdrawalLimit {
                    limit: withdrawal_limit.amount(),
                });
            }

            let withdrawals_today = self
                .history
                .occurred_on(today)
                .filter(|r| r.kind == TransactionKind::Withdrawal)
                .count();
            if withdrawals_today >= max_daily_withdrawals {
                return Err(Error::DailyWithdrawalsExceeded {
                    max: max_daily_withdrawals,
                });
            }
        }

        self.withdraw_from_balance(amount)
    }

    fn withdraw_from_balance(&mut self, amount: Money) -> Result<(), Error> {
        if !amount.is_positive() {
            return Err(Error::InvalidAmount);
        }

        if amount.amount() > self.balance {
            return Err(Error::InsufficientFunds {
                balance: self.balance,
                amount: amount.amount(),
            });
        }

        self.balance -= amount.amount();
        Ok(())
    }
}
