use chrono::NaiveDateTime;

use crate::domain::{Account, Error, Transaction};

/// A natural-person client, keyed by tax id.
#[derive(Debug, Clone)]
pub struct Client {
    pub full_name: String,
    pub birth_date: String,
    pub address: String,
    tax_id: String,
    accounts: Vec<u32>,
    daily_transaction_limit: usize,
}

impl Client {
    pub fn new(
        full_name: impl Into<String>,
        birth_date: impl Into<String>,
        tax_id: impl Into<String>,
        address: impl Into<String>,
        daily_transaction_limit: usize,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date: birth_date.into(),
            address: address.into(),
            tax_id: tax_id.into(),
            accounts: Vec::new(),
            daily_transaction_limit,
        }
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Numbers of the owned accounts, in the order they were opened.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    pub fn add_account(&mut self, account: &Account) {
        self.accounts.push(account.number());
    }

    /// Runs `transaction` against `account` unless the account already saw
    /// the daily limit of transactions (deposits and withdrawals together).
    pub fn conduct_transaction(
        &self,
        account: &mut Account,
        transaction: Transaction,
        now: NaiveDateTime,
    ) -> Result<(), Error> {
        if account.owner() != self.tax_id {
            return Err(Error::NotAccountOwner {
                account: account.number(),
                tax_id: self.tax_id.clone(),
            });
        }

        if account.history().occurred_today(now.date()).len() >= self.daily_transaction_limit {
            return Err(Error::DailyTransactionsExceeded {
                max: self.daily_transaction_limit,
            });
        }

        transaction.register(account, now)
    }
}

impl core::fmt::Display for Client {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Client(name='{}', birth_date='{}', tax_id='{}', address='{}')",
            self.full_name, self.birth_date, self.tax_id, self.address
        )
    }
}
