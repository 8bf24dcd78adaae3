use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Input closed.")]
    EndOfInput,

    #[error("The amount informed is invalid.")]
    InvalidAmount,

    #[error("The amount would overflow the account balance.")]
    BalanceOverflow,

    #[error("Insufficient balance: {balance} available, {amount} requested.")]
    InsufficientFunds { balance: Decimal, amount: Decimal },

    #[error("The withdrawal amount exceeds the limit of {limit}.")]
    ExceedsWithdrawalLimit { limit: Decimal },

    #[error("Maximum number of {max} withdrawals per day exceeded.")]
    DailyWithdrawalsExceeded { max: usize },

    #[error("You exceeded the {max} transactions allowed for today!")]
    DailyTransactionsExceeded { max: usize },

    #[error("Client {0} not found.")]
    ClientNotFound(String),

    #[error("Client {0} has no account.")]
    NoAccount(String),

    #[error("Account {0} not found.")]
    AccountNotFound(u32),

    #[error("Account {account} is not owned by client {tax_id}.")]
    NotAccountOwner { account: u32, tax_id: String },

    #[error("A client with tax id {0} already exists.")]
    DuplicateTaxId(String),
}
