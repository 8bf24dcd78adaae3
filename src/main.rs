mod bank;
mod clock;
mod config;
mod domain;
mod input;
mod shell;

use crate::bank::Bank;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::domain::InputStream;
use crate::input::LineReader;
use crate::shell::Shell;

#[tokio::main(flavor = "current_thread")] // one user, one prompt at a time
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    // stdout carries the conversation with the user, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let bank = Bank::new(config, SystemClock);
    let input = LineReader::new(tokio::io::stdin()).lines();

    let mut shell = Shell::new(bank, input, std::io::stdout());
    shell.run().await?;

    Ok(())
}
