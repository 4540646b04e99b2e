use crate::account::CheckingPolicy;
use crate::client::{Address, Client};
use crate::error::{LedgerError, Result};
use crate::transaction::TransactionKind;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One client seed row: identity plus optional checking-policy overrides.
///
/// `limit` and `daily_withdrawals` left empty fall back to the default
/// policy.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ClientRow {
    pub tax_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub postal_code: String,
    pub street: String,
    pub unit: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub limit: Option<Decimal>,
    pub daily_withdrawals: Option<usize>,
}

impl ClientRow {
    /// Checking policy for this client's account, with the row's overrides
    /// applied on top of the defaults.
    pub fn policy(&self) -> CheckingPolicy {
        let defaults = CheckingPolicy::default();
        CheckingPolicy {
            operation_limit: self.limit.unwrap_or(defaults.operation_limit),
            daily_withdrawal_cap: self.daily_withdrawals.unwrap_or(defaults.daily_withdrawal_cap),
        }
    }

    pub fn into_client(self) -> Client {
        Client::new(
            self.name,
            self.tax_id,
            self.birth_date,
            self.phone,
            Address {
                street: self.street,
                unit: self.unit,
                district: self.district,
                city: self.city,
                state: self.state,
                postal_code: self.postal_code,
            },
        )
    }
}

/// One operation row. An empty `account` cell leaves the selection to the
/// caller.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OperationRow {
    pub r#type: TransactionKind,
    pub client: String,
    pub account: Option<u32>,
    pub amount: Decimal,
}

/// Reads client seed rows from a CSV source.
pub struct ClientReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ClientReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes seed rows.
    pub fn clients(self) -> impl Iterator<Item = Result<ClientRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}

/// Reads operation rows from a CSV source.
///
/// Wraps `csv::Reader` the same way as `ClientReader`: whitespace trimmed,
/// flexible record lengths, one `Result` per row so a malformed line does
/// not abort the stream.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn operations(self) -> impl Iterator<Item = Result<OperationRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}
