pub mod account;
pub mod client;
pub mod error;
pub mod history;
pub mod money;
pub mod traits;
pub mod transaction;

pub use account::{Account, AccountPolicy};
pub use client::Client;
pub use error::Error;
pub use history::History;
pub use money::Money;
pub use traits::{Clock, InputStream};
pub use transaction::{Transaction, TransactionKind, TransactionRecord};
