use crate::account::Account;
use crate::bank::Bank;
use crate::error::Result;
use std::io::Write;

/// Writes account summaries and statements as CSV.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(sink),
        }
    }

    /// One summary row per account, in opening order.
    pub fn write_accounts(&mut self, bank: &Bank) -> Result<()> {
        self.writer
            .write_record(["account", "branch", "client", "balance"])?;
        for account in bank.accounts() {
            let number = account.number().to_string();
            let balance = account.balance().to_string();
            self.writer.write_record([
                number.as_str(),
                account.branch(),
                account.client(),
                balance.as_str(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// The account's history in insertion order, optionally restricted to
    /// one kind, followed by the current balance.
    pub fn write_statement(&mut self, account: &Account, kind: Option<&str>) -> Result<()> {
        self.writer.write_record(["timestamp", "kind", "amount"])?;
        for record in account.history().report(kind) {
            let timestamp = record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
            let amount = record.amount.to_string();
            self.writer
                .write_record([timestamp.as_str(), record.kind.as_str(), amount.as_str()])?;
        }
        let balance = account.balance().to_string();
        self.writer.write_record(["", "balance", balance.as_str()])?;
        self.writer.flush()?;
        Ok(())
    }
}
