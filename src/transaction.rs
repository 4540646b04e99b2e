use crate::account::Account;
use crate::error::Result;
use crate::history::TransactionRecord;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// The tag recorded in an account's history and matched (case
    /// insensitively) by statement filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

/// One monetary movement, fixed at construction.
///
/// The amount is carried as-is; sign validation happens inside the account
/// operations, so an invalid amount surfaces as a refused `apply`, never as
/// a construction failure.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self { kind, amount }
    }

    pub fn deposit(amount: Decimal) -> Self {
        Self::new(TransactionKind::Deposit, amount)
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self::new(TransactionKind::Withdrawal, amount)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Applies this transaction to an account.
    ///
    /// On success exactly one record is appended to the account's history,
    /// stamped at append time. A refused operation appends nothing.
    pub fn apply(&self, account: &mut Account) -> Result<()> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount)?,
        }
        account.record(TransactionRecord::new(self.kind, self.amount));
        Ok(())
    }
}
