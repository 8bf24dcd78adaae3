use chrono::NaiveDateTime;

use crate::domain::{Account, Error, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// A requested movement of money, not yet applied to any account.
#[derive(Debug, Clone, Copy)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: Money,
}

impl Transaction {
    pub fn deposit(amount: Money) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Money) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }

    /// Applies the transaction to `account` and, only when the account
    /// accepted it, appends it to the account history stamped with `now`.
    pub fn register(&self, account: &mut Account, now: NaiveDateTime) -> Result<(), Error> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount, now.date())?,
        }

        account.history_mut().record(self, now);
        Ok(())
    }
}

/// A completed transaction as kept in an account history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: NaiveDateTime,
}

impl core::fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}\n{}:\n\t{}",
            self.timestamp.format("%d-%m-%Y %H:%M:%S"),
            self.kind,
            self.amount
        )
    }
}
