use std::io::Write;

use futures::{Stream, StreamExt};
use tracing::{info, warn};

use crate::bank::{Bank, normalize_tax_id};
use crate::domain::{Clock, Error, Money};

const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

const FAREWELL: &str = "Thank you for using our banking system. See you soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewClient,
    NewAccount,
    ListAccounts,
    Quit,
    Invalid,
}

impl Command {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "d" => Command::Deposit,
            "s" => Command::Withdraw,
            "e" => Command::Statement,
            "nu" => Command::NewClient,
            "nc" => Command::NewAccount,
            "lc" => Command::ListAccounts,
            "q" => Command::Quit,
            _ => Command::Invalid,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Deposit => "deposit",
            Command::Withdraw => "withdraw",
            Command::Statement => "statement",
            Command::NewClient => "new_client",
            Command::NewAccount => "new_account",
            Command::ListAccounts => "list_accounts",
            Command::Quit => "quit",
            Command::Invalid => "invalid",
        }
    }
}

/// The interactive menu loop. Reads from `input`, writes the transcript to
/// `out` and keeps all state in `bank`.
pub struct Shell<S, W, C>
where
    S: Stream<Item = Result<String, Error>> + Unpin,
    W: Write,
    C: Clock,
{
    bank: Bank<C>,
    input: S,
    out: W,
}

impl<S, W, C> Shell<S, W, C>
where
    S: Stream<Item = Result<String, Error>> + Unpin,
    W: Write,
    C: Clock,
{
    pub fn new(bank: Bank<C>, input: S, out: W) -> Self {
        Self { bank, input, out }
    }

    /// Runs until the quit command or the end of input. Only I/O failures
    /// are returned; every other error is reported and the menu shown again.
    pub async fn run(&mut self) -> Result<(), Error> {
        loop {
            write!(self.out, "{}", MENU)?;
            self.out.flush()?;

            let command = match self.input.next().await {
                Some(line) => Command::parse(&line?),
                None => Command::Quit,
            };

            match command {
                Command::Quit => break,
                Command::Invalid => writeln!(
                    self.out,
                    "\n@@@ Invalid operation, please select the desired operation again. @@@"
                )?,
                command => match self.dispatch(command).await {
                    Ok(()) => {}
                    Err(Error::EndOfInput) => break,
                    Err(e) => return Err(e),
                },
            }
        }

        writeln!(self.out, "\n{}", FAREWELL)?;
        self.out.flush()?;
        Ok(())
    }

    /// Runs one handler between a start and an end log event. Rejections
    /// are shown to the user; I/O errors and end of input bubble up.
    async fn dispatch(&mut self, command: Command) -> Result<(), Error> {
        info!(command = command.name(), "started");

        let outcome = match command {
            Command::Deposit => self.deposit().await,
            Command::Withdraw => self.withdraw().await,
            Command::Statement => self.statement().await,
            Command::NewClient => self.new_client().await,
            Command::NewAccount => self.new_account().await,
            Command::ListAccounts => self.list_accounts(),
            Command::Quit | Command::Invalid => Ok(()),
        };

        match outcome {
            Ok(()) => {
                info!(command = command.name(), "executed");
                Ok(())
            }
            Err(e @ (Error::IO(_) | Error::EndOfInput)) => Err(e),
            Err(e) => {
                warn!(command = command.name(), error = %e, "rejected");
                writeln!(self.out, "\n@@@ Operation failed! {} @@@", e)?;
                Ok(())
            }
        }
    }

    async fn prompt(&mut self, question: &str) -> Result<String, Error> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;

        match self.input.next().await {
            Some(line) => line,
            None => Err(Error::EndOfInput),
        }
    }

    async fn prompt_amount(&mut self, question: &str) -> Result<Money, Error> {
        let amount: Money = self.prompt(question).await?.parse()?;
        if !amount.is_positive() {
            return Err(Error::InvalidAmount);
        }
        Ok(amount)
    }

    async fn deposit(&mut self) -> Result<(), Error> {
        let tax_id = self.prompt("Enter the client's tax id: ").await?;
        self.bank.client(&tax_id)?;

        let amount = self.prompt_amount("Enter the deposit amount: ").await?;
        self.bank.deposit(&tax_id, amount)?;

        writeln!(self.out, "\n=== Deposit completed successfully! ===")?;
        Ok(())
    }

    async fn withdraw(&mut self) -> Result<(), Error> {
        let tax_id = self.prompt("Enter the client's tax id: ").await?;
        self.bank.client(&tax_id)?;

        let amount = self.prompt_amount("Enter the withdrawal amount: ").await?;
        self.bank.withdraw(&tax_id, amount)?;

        writeln!(self.out, "\n=== Withdrawal completed successfully! ===")?;
        Ok(())
    }

    async fn statement(&mut self) -> Result<(), Error> {
        let tax_id = self.prompt("Enter the client's tax id: ").await?;
        let account = self.bank.account_of(&tax_id)?;

        writeln!(self.out, "\n================ STATEMENT ================")?;
        if account.history().is_empty() {
            writeln!(self.out, "No transactions recorded.")?;
        }
        for record in account.history().filter_by_kind(None) {
            writeln!(self.out, "{}", record)?;
        }
        writeln!(self.out, "\nBalance:\n\t{}", account.balance())?;
        writeln!(self.out, "===========================================")?;
        Ok(())
    }

    async fn new_client(&mut self) -> Result<(), Error> {
        let tax_id = normalize_tax_id(&self.prompt("Enter the tax id (numbers only): ").await?);
        if self.bank.client(&tax_id).is_ok() {
            return Err(Error::DuplicateTaxId(tax_id));
        }

        let full_name = self.prompt("Enter the full name: ").await?;
        let birth_date = self.prompt("Enter the birth date (dd-mm-yyyy): ").await?;
        let address = self
            .prompt("Enter the address (street, number - district - city/state): ")
            .await?;

        self.bank
            .create_client(&tax_id, &full_name, &birth_date, &address)?;

        writeln!(self.out, "\n=== Client created successfully! ===")?;
        Ok(())
    }

    async fn new_account(&mut self) -> Result<(), Error> {
        let tax_id = self.prompt("Enter the client's tax id: ").await?;
        let number = self.bank.create_account(&tax_id)?.number();

        writeln!(self.out, "\n=== Account {} created successfully! ===", number)?;
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<(), Error> {
        let mut listed = 0;
        for listing in self.bank.accounts() {
            writeln!(self.out, "{}", "=".repeat(100))?;
            writeln!(self.out, "{}", listing)?;
            listed += 1;
        }

        if listed == 0 {
            writeln!(self.out, "No accounts registered.")?;
        }
        Ok(())
    }
}
