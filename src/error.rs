use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Business-rule refusals are returned as values; nothing in the ledger
/// panics or retries. A failed operation leaves all state untouched.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("insufficient funds for this withdrawal")]
    InsufficientFunds,
    #[error("withdrawal exceeds the permitted limit for this account")]
    ExceedsOperationLimit,
    #[error("daily withdrawal count exceeded")]
    DailyWithdrawalCapExceeded,
    #[error("daily transaction limit exceeded")]
    DailyTransactionCapExceeded,
    #[error("no client registered under tax id {0}")]
    UnknownClient(String),
    #[error("a client is already registered under tax id {0}")]
    ClientAlreadyRegistered(String),
    #[error("client {client} has no account {number}")]
    NoAccountForClient { client: String, number: u32 },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
