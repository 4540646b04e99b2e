use clap::Parser;
use miette::{IntoDiagnostic, Result};
use minibank::account::AccountKind;
use minibank::audit::AuditLog;
use minibank::bank::Bank;
use minibank::reader::{ClientReader, OperationReader, OperationRow};
use minibank::transaction::Transaction;
use minibank::writer::AccountWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Client seed CSV file
    clients: PathBuf,

    /// Operations CSV file
    operations: PathBuf,

    /// Print this account's statement instead of the summary
    #[arg(long)]
    statement: Option<u32>,

    /// Restrict the statement to one transaction kind
    #[arg(long, requires = "statement")]
    kind: Option<String>,

    /// Append one audit line per completed operation to this file
    #[arg(long)]
    audit_log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut audit = match &cli.audit_log {
        Some(path) => Some(AuditLog::open(path).into_diagnostic()?),
        None => None,
    };

    let mut bank = Bank::new();

    // Each seed row registers the client and opens one checking account
    // with the row's policy overrides.
    let file = File::open(&cli.clients).into_diagnostic()?;
    for row_result in ClientReader::new(file).clients() {
        match row_result {
            Ok(row) => {
                let tax_id = row.tax_id.clone();
                let policy = row.policy();
                let result = bank
                    .register_client(row.into_client())
                    .and_then(|()| bank.open_account(&tax_id, AccountKind::Checking(policy)));
                let outcome = match &result {
                    Ok(number) => format!("account {number}"),
                    Err(e) => {
                        eprintln!("Error seeding client {tax_id}: {e}");
                        format!("refused: {e}")
                    }
                };
                if let Some(log) = audit.as_mut() {
                    log.record("open_account", &format!("tax_id={tax_id}"), &outcome)
                        .into_diagnostic()?;
                }
            }
            Err(e) => eprintln!("Error reading client row: {e}"),
        }
    }

    // Apply operations in order; a refused row is reported and processing
    // continues.
    let file = File::open(&cli.operations).into_diagnostic()?;
    for row_result in OperationReader::new(file).operations() {
        match row_result {
            Ok(op) => {
                let Some(number) = resolve_account(&bank, &op) else {
                    if bank.client(&op.client).is_none() {
                        eprintln!("Error processing operation: no client registered under tax id {}", op.client);
                    } else {
                        eprintln!("Error processing operation: no account on file for client {}", op.client);
                    }
                    continue;
                };
                let tx = Transaction::new(op.r#type, op.amount);
                let result = bank.execute_transaction(&op.client, number, &tx);
                let outcome = match &result {
                    Ok(()) => "ok".to_string(),
                    Err(e) => {
                        eprintln!("Error processing operation: {e}");
                        format!("refused: {e}")
                    }
                };
                if let Some(log) = audit.as_mut() {
                    log.record(
                        op.r#type.as_str(),
                        &format!(
                            "client={} account={} amount={}",
                            op.client, number, op.amount
                        ),
                        &outcome,
                    )
                    .into_diagnostic()?;
                }
            }
            Err(e) => eprintln!("Error reading operation row: {e}"),
        }
    }

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    match cli.statement {
        Some(number) => {
            let account = bank
                .account(number)
                .ok_or_else(|| miette::miette!("no account {number}"))?;
            writer
                .write_statement(account, cli.kind.as_deref())
                .into_diagnostic()?;
        }
        None => writer.write_accounts(&bank).into_diagnostic()?,
    }

    Ok(())
}

/// An explicit account cell wins; an empty one falls back to the client's
/// first account, mirroring the interactive flow this ledger came from.
fn resolve_account(bank: &Bank, op: &OperationRow) -> Option<u32> {
    op.account.or_else(|| {
        bank.client(&op.client)
            .and_then(|client| client.accounts().first().copied())
    })
}
