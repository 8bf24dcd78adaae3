use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{Account, AccountPolicy, Client, Clock, Error, Money, Transaction};

/// Strips the punctuation people usually type in tax ids ("123.456.789-00").
pub fn normalize_tax_id(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != '.' && *c != '-').collect()
}

pub fn find_client<'a>(tax_id: &str, clients: &'a [Client]) -> Option<&'a Client> {
    clients.iter().find(|c| c.tax_id() == tax_id)
}

/// Clients with several accounts always operate on the first one opened.
pub fn first_account_of(client: &Client) -> Result<u32, Error> {
    client
        .accounts()
        .first()
        .copied()
        .ok_or_else(|| Error::NoAccount(client.tax_id().to_owned()))
}

/// All clients and accounts of a running session.
#[derive(Debug)]
pub struct Bank<C: Clock> {
    config: Config,
    clock: C,
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl<C: Clock> Bank<C> {
    pub fn new(config: Config, clock: C) -> Self {
        Self {
            config,
            clock,
            clients: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn client(&self, tax_id: &str) -> Result<&Client, Error> {
        let tax_id = normalize_tax_id(tax_id);
        debug!(%tax_id, "looking up client");
        find_client(&tax_id, &self.clients).ok_or(Error::ClientNotFound(tax_id))
    }

    pub fn create_client(
        &mut self,
        tax_id: &str,
        full_name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<&Client, Error> {
        let tax_id = normalize_tax_id(tax_id);
        if find_client(&tax_id, &self.clients).is_some() {
            warn!(%tax_id, "duplicate tax id");
            return Err(Error::DuplicateTaxId(tax_id));
        }

        let client = Client::new(
            full_name.trim(),
            birth_date.trim(),
            tax_id,
            address.trim(),
            self.config.max_daily_transactions,
        );
        info!(client = %client, "client created");
        self.clients.push(client);

        Ok(&self.clients[self.clients.len() - 1])
    }

    /// Opens a current account for the client. Numbers are sequential,
    /// starting at 1.
    pub fn create_account(&mut self, tax_id: &str) -> Result<&Account, Error> {
        let tax_id = normalize_tax_id(tax_id);
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.tax_id() == tax_id)
            .ok_or_else(|| Error::ClientNotFound(tax_id.clone()))?;

        let number = self.accounts.len() as u32 + 1;
        let account = Account::current(
            number,
            self.config.agency.as_str(),
            tax_id.as_str(),
            self.config.withdrawal_limit,
            self.config.max_daily_withdrawals,
        );
        client.add_account(&account);
        info!(%tax_id, number, "account created");
        self.accounts.push(account);

        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn account(&self, number: u32) -> Result<&Account, Error> {
        self.accounts
            .iter()
            .find(|a| a.number() == number)
            .ok_or(Error::AccountNotFound(number))
    }

    /// The account a client operates on, see [`first_account_of`].
    pub fn account_of(&self, tax_id: &str) -> Result<&Account, Error> {
        let number = first_account_of(self.client(tax_id)?)?;
        self.account(number)
    }

    pub fn deposit(&mut self, tax_id: &str, amount: Money) -> Result<Money, Error> {
        self.transact(tax_id, Transaction::deposit(amount))
    }

    pub fn withdraw(&mut self, tax_id: &str, amount: Money) -> Result<Money, Error> {
        self.transact(tax_id, Transaction::withdrawal(amount))
    }

    /// Returns the new balance of the account the transaction ran against.
    fn transact(&mut self, tax_id: &str, transaction: Transaction) -> Result<Money, Error> {
        let tax_id = normalize_tax_id(tax_id);
        let client = find_client(&tax_id, &self.clients)
            .ok_or_else(|| Error::ClientNotFound(tax_id.clone()))?;
        let number = first_account_of(client)?;
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(Error::AccountNotFound(number))?;

        match client.conduct_transaction(account, transaction, self.clock.now()) {
            Ok(()) => {
                info!(
                    %tax_id,
                    account = number,
                    kind = %transaction.kind,
                    amount = %transaction.amount,
                    records = account.history().len(),
                    "transaction registered"
                );
                Ok(account.balance())
            }
            Err(e) => {
                warn!(%tax_id, account = number, kind = %transaction.kind, error = %e, "transaction refused");
                Err(e)
            }
        }
    }

    pub fn accounts(&self) -> impl Iterator<Item = AccountListing<'_>> {
        self.accounts.iter().filter_map(|account| {
            find_client(account.owner(), &self.clients).map(|holder| AccountListing { account, holder })
        })
    }
}

/// An account together with its holder, rendered as one block of the
/// account listing.
#[derive(Debug, Clone, Copy)]
pub struct AccountListing<'a> {
    pub account: &'a Account,
    pub holder: &'a Client,
}

impl core::fmt::Display for AccountListing<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Agency:\t\t{}", self.account.agency())?;
        writeln!(f, "Account:\t{}", self.account.number())?;
        writeln!(f, "Holder:\t\t{}", self.holder.full_name)?;
        if let AccountPolicy::Current {
            withdrawal_limit, ..
        } = self.account.policy()
        {
            writeln!(f, "Limit:\t\t{}", withdrawal_limit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use rust_decimal::Decimal;

    use super::*;
    use crate::clock::FixedClock;

    fn money(v: i64) -> Money {
        Money(Decimal::from(v))
    }

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn bank_with_client(clock: &FixedClock) -> Bank<&FixedClock> {
        let mut bank = Bank::new(Config::default(), clock);
        bank.create_client("123.456.789-00", "Ana Souza", "01-01-1990", "Street 1")
            .unwrap();
        bank
    }

    #[test]
    fn tax_ids_are_normalized() {
        assert_eq!(normalize_tax_id(" 123.456.789-00 "), "12345678900");

        let clock = FixedClock::new(morning());
        let bank = bank_with_client(&clock);
        assert_eq!(bank.client("12345678900").unwrap().full_name, "Ana Souza");
        assert!(bank.client("123.456.789-00").is_ok());
    }

    #[test]
    fn duplicate_tax_id_is_rejected_and_original_kept() {
        let clock = FixedClock::new(morning());
        let mut bank = bank_with_client(&clock);

        let res = bank.create_client("12345678900", "Impostor", "02-02-2000", "Elsewhere");

        assert!(matches!(res, Err(Error::DuplicateTaxId(_))));
        let client = bank.client("12345678900").unwrap();
        assert_eq!(client.full_name, "Ana Souza");
        assert_eq!(client.address, "Street 1");
    }

    #[test]
    fn accounts_are_numbered_sequentially() {
        let clock = FixedClock::new(morning());
        let mut bank = bank_with_client(&clock);
        bank.create_client("999", "Bruno", "03-03-1985", "Street 2")
            .unwrap();

        assert_eq!(bank.create_account("12345678900").unwrap().number(), 1);
        assert_eq!(bank.create_account("999").unwrap().number(), 2);
        assert_eq!(bank.create_account("12345678900").unwrap().number(), 3);

        assert_eq!(bank.client("12345678900").unwrap().accounts(), &[1, 3]);
        assert_eq!(bank.account(2).unwrap().owner(), "999");
    }

    #[test]
    fn create_account_for_unknown_client_fails() {
        let clock = FixedClock::new(morning());
        let mut bank = Bank::new(Config::default(), &clock);

        assert!(matches!(
            bank.create_account("404"),
            Err(Error::ClientNotFound(_))
        ));
        assert_eq!(bank.accounts().count(), 0);
    }

    #[test]
    fn transactions_need_a_client_and_an_account() {
        let clock = FixedClock::new(morning());
        let mut bank = bank_with_client(&clock);

        assert!(matches!(
            bank.deposit("404", money(10)),
            Err(Error::ClientNotFound(_))
        ));
        assert!(matches!(
            bank.deposit("12345678900", money(10)),
            Err(Error::NoAccount(_))
        ));
    }

    #[test]
    fn first_account_is_always_used() {
        let clock = FixedClock::new(morning());
        let mut bank = bank_with_client(&clock);
        bank.create_account("12345678900").unwrap();
        bank.create_account("12345678900").unwrap();

        bank.deposit("12345678900", money(10)).unwrap();

        assert_eq!(bank.account(1).unwrap().balance(), money(10));
        assert_eq!(bank.account(2).unwrap().balance(), money(0));
    }

    #[test]
    fn current_account_scenario() {
        let clock = FixedClock::new(morning());
        let mut bank = bank_with_client(&clock);
        bank.create_account("12345678900").unwrap();

        assert_eq!(bank.deposit("12345678900", money(1000)).unwrap(), money(1000));

        clock.advance(TimeDelta::minutes(1));
        assert!(matches!(
            bank.withdraw("12345678900", money(600)),
            Err(Error::ExceedsWithdrawalLimit { .. })
        ));

        clock.advance(TimeDelta::minutes(1));
        assert_eq!(bank.withdraw("12345678900", money(500)).unwrap(), money(500));

        clock.advance(TimeDelta::minutes(1));
        assert!(matches!(
            bank.withdraw("12345678900", money(500)),
            Err(Error::DailyTransactionsExceeded { max: 2 })
        ));
        assert_eq!(bank.account_of("12345678900").unwrap().balance(), money(500));

        // next day the account is usable again
        clock.advance(TimeDelta::days(1));
        assert_eq!(bank.withdraw("12345678900", money(500)).unwrap(), money(0));
    }

    #[test]
    fn oversized_deposits_are_refused_not_fatal() {
        let clock = FixedClock::new(morning());
        let mut bank = bank_with_client(&clock);
        bank.create_account("12345678900").unwrap();
        let max: Money = "79228162514264337593543950335".parse().unwrap();

        assert_eq!(bank.deposit("12345678900", max).unwrap(), max);
        assert!(matches!(
            bank.deposit("12345678900", max),
            Err(Error::BalanceOverflow)
        ));

        let account = bank.account_of("12345678900").unwrap();
        assert_eq!(account.balance(), max);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn insufficient_balance_keeps_balance() {
        let clock = FixedClock::new(morning());
        let mut bank = bank_with_client(&clock);
        bank.create_account("12345678900").unwrap();
        bank.deposit("12345678900", money(50)).unwrap();

        assert!(matches!(
            bank.withdraw("12345678900", money(100)),
            Err(Error::InsufficientFunds { .. })
        ));
        assert_eq!(bank.account_of("12345678900").unwrap().balance(), money(50));
    }

    #[test]
    fn listing_shows_holder_and_limit() {
        let clock = FixedClock::new(morning());
        let mut bank = bank_with_client(&clock);
        bank.create_account("12345678900").unwrap();

        let listings: Vec<String> = bank.accounts().map(|l| l.to_string()).collect();

        assert_eq!(
            listings,
            vec!["Agency:\t\t0001\nAccount:\t1\nHolder:\t\tAna Souza\nLimit:\t\tR$ 500.00\n"]
        );
    }
}
