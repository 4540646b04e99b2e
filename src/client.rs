use crate::account::Account;
use crate::error::{LedgerError, Result};
use crate::transaction::Transaction;
use chrono::NaiveDate;

/// System-wide cap on transactions (deposits and withdrawals together) per
/// account per calendar day. Independent of any per-account policy.
pub const DAILY_TRANSACTION_CAP: usize = 5;

#[derive(Debug, PartialEq, Clone)]
pub struct Address {
    pub street: String,
    pub unit: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// A registered bank client.
///
/// Identity fields are fixed at registration; the only mutation afterwards
/// is appending newly opened account numbers.
#[derive(Debug, Clone)]
pub struct Client {
    pub name: String,
    pub tax_id: String,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub address: Address,
    accounts: Vec<u32>,
}

impl Client {
    pub fn new(
        name: String,
        tax_id: String,
        birth_date: NaiveDate,
        phone: String,
        address: Address,
    ) -> Self {
        Self {
            name,
            tax_id,
            birth_date,
            phone,
            address,
            accounts: Vec::new(),
        }
    }

    /// Account numbers owned by this client, in opening order.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    pub fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }

    /// Executes a transaction against one of this client's accounts.
    ///
    /// Refuses without delegating once the account has reached the daily
    /// transaction cap; otherwise the transaction applies itself and
    /// records the outcome.
    pub fn execute_transaction(&self, account: &mut Account, transaction: &Transaction) -> Result<()> {
        if account.history().transactions_today().len() >= DAILY_TRANSACTION_CAP {
            return Err(LedgerError::DailyTransactionCapExceeded);
        }
        transaction.apply(account)
    }
}
