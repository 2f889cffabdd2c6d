use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use wallet_cli::audit::AuditLogger;
use wallet_cli::services::Ledger;
use wallet_cli::shell::Shell;
use wallet_cli::storage::{LedgerStore, LoadOutcome};

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Terminal-based personal finance wallet",
    long_about = "wallet-cli is a menu-driven console ledger for recording \
                  income and expense entries. Records are kept in a plain \
                  delimited text file and every mutation is saved immediately."
)]
struct Cli {
    /// Path to the ledger file
    #[arg(short, long, default_value = "transactions.txt")]
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = LedgerStore::new(cli.file);
    let mut ledger = match store.load()? {
        LoadOutcome::Existing(records) => Ledger::new(records),
        LoadOutcome::FirstRun => {
            println!(
                "Ledger file '{}' not found. A new file will be created.",
                store.path().display()
            );
            Ledger::default()
        }
    };

    let audit = AuditLogger::new(store.audit_log_path());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(
        &mut ledger,
        &store,
        &audit,
        stdin.lock(),
        stdout.lock(),
    )
    .run()?;

    Ok(())
}
