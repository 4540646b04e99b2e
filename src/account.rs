use crate::error::{LedgerError, Result};
use crate::history::{History, TransactionRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Branch code shared by every account in this ledger.
pub const BRANCH_CODE: &str = "0001";

/// Withdrawal restrictions applied by checking accounts.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CheckingPolicy {
    /// Largest amount a single withdrawal may move.
    pub operation_limit: Decimal,
    /// Maximum number of recorded withdrawals before further ones are
    /// refused.
    pub daily_withdrawal_cap: usize,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            operation_limit: dec!(500),
            daily_withdrawal_cap: 3,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AccountKind {
    Standard,
    Checking(CheckingPolicy),
}

/// A single-currency account holding a balance and its transaction history.
///
/// The balance only changes through `deposit` and `withdraw`; both refuse
/// invalid requests without mutating anything, and neither touches the
/// history — recording is the applying transaction's job.
#[derive(Debug)]
pub struct Account {
    number: u32,
    branch: &'static str,
    client: String,
    kind: AccountKind,
    balance: Decimal,
    history: History,
}

impl Account {
    pub(crate) fn new(number: u32, client: String, kind: AccountKind) -> Self {
        Self {
            number,
            branch: BRANCH_CODE,
            client,
            kind,
            balance: Decimal::ZERO,
            history: History::new(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &str {
        self.branch
    }

    /// Tax id of the owning client.
    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn record(&mut self, record: TransactionRecord) {
        self.history.append(record);
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if let AccountKind::Checking(policy) = &self.kind {
            // Every recorded withdrawal counts toward the cap, not only
            // today's.
            let prior = self.history.report(Some("withdrawal")).count();
            if amount > policy.operation_limit {
                return Err(LedgerError::ExceedsOperationLimit);
            }
            if prior >= policy.daily_withdrawal_cap {
                return Err(LedgerError::DailyWithdrawalCapExceeded);
            }
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{Transaction, TransactionKind};

    fn standard_account() -> Account {
        Account::new(1, "12345678900".to_string(), AccountKind::Standard)
    }

    fn checking_account() -> Account {
        Account::new(
            1,
            "12345678900".to_string(),
            AccountKind::Checking(CheckingPolicy::default()),
        )
    }

    #[test]
    fn test_deposit_positive_amount() {
        let mut account = standard_account();
        account.deposit(dec!(10.5)).unwrap();
        assert_eq!(account.balance(), dec!(10.5));
    }

    #[test]
    fn test_deposit_rejects_non_positive_amounts() {
        let mut account = standard_account();
        assert!(matches!(
            account.deposit(dec!(0.0)),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            account.deposit(dec!(-5.0)),
            Err(LedgerError::InvalidAmount)
        ));
        assert_eq!(account.balance(), dec!(0.0));
    }

    #[test]
    fn test_withdraw_sufficient_funds() {
        let mut account = standard_account();
        account.deposit(dec!(10.0)).unwrap();
        account.withdraw(dec!(4.0)).unwrap();
        assert_eq!(account.balance(), dec!(6.0));
    }

    #[test]
    fn test_withdraw_insufficient_funds_leaves_balance() {
        let mut account = standard_account();
        account.deposit(dec!(10.0)).unwrap();

        let result = account.withdraw(dec!(11.0));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds)));
        assert_eq!(account.balance(), dec!(10.0));
    }

    #[test]
    fn test_withdraw_rejects_non_positive_amounts() {
        let mut account = standard_account();
        account.deposit(dec!(10.0)).unwrap();

        assert!(matches!(
            account.withdraw(dec!(0.0)),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            account.withdraw(dec!(-1.0)),
            Err(LedgerError::InvalidAmount)
        ));
        assert_eq!(account.balance(), dec!(10.0));
    }

    #[test]
    fn test_checking_operation_limit() {
        let mut account = checking_account();
        account.deposit(dec!(1000.0)).unwrap();

        // 600 exceeds the default 500 limit regardless of balance.
        let result = account.withdraw(dec!(600.0));
        assert!(matches!(result, Err(LedgerError::ExceedsOperationLimit)));
        assert_eq!(account.balance(), dec!(1000.0));

        account.withdraw(dec!(500.0)).unwrap();
        assert_eq!(account.balance(), dec!(500.0));
    }

    #[test]
    fn test_checking_withdrawal_cap_counts_all_history() {
        let mut account = checking_account();
        Transaction::deposit(dec!(1000.0)).apply(&mut account).unwrap();

        for _ in 0..3 {
            Transaction::withdrawal(dec!(100.0))
                .apply(&mut account)
                .unwrap();
        }
        assert_eq!(account.balance(), dec!(700.0));

        // The fourth attempt is refused by count even though balance and
        // limit would both allow it.
        let result = account.withdraw(dec!(100.0));
        assert!(matches!(result, Err(LedgerError::DailyWithdrawalCapExceeded)));
        assert_eq!(account.balance(), dec!(700.0));
    }

    #[test]
    fn test_checking_cap_ignores_deposits() {
        let mut account = checking_account();
        for _ in 0..5 {
            Transaction::deposit(dec!(10.0)).apply(&mut account).unwrap();
        }

        account.withdraw(dec!(20.0)).unwrap();
        assert_eq!(account.balance(), dec!(30.0));
    }

    #[test]
    fn test_checking_policy_override() {
        let policy = CheckingPolicy {
            operation_limit: dec!(50),
            daily_withdrawal_cap: 1,
        };
        let mut account = Account::new(
            2,
            "12345678900".to_string(),
            AccountKind::Checking(policy),
        );
        Transaction::deposit(dec!(200.0)).apply(&mut account).unwrap();

        assert!(matches!(
            account.withdraw(dec!(60.0)),
            Err(LedgerError::ExceedsOperationLimit)
        ));
        Transaction::withdrawal(dec!(40.0))
            .apply(&mut account)
            .unwrap();
        assert!(matches!(
            account.withdraw(dec!(40.0)),
            Err(LedgerError::DailyWithdrawalCapExceeded)
        ));
    }

    #[test]
    fn test_balance_never_negative() {
        let mut account = standard_account();
        let operations = [
            Transaction::deposit(dec!(30.0)),
            Transaction::withdrawal(dec!(50.0)),
            Transaction::withdrawal(dec!(30.0)),
            Transaction::withdrawal(dec!(1.0)),
            Transaction::deposit(dec!(-10.0)),
        ];

        for op in operations {
            let _ = op.apply(&mut account);
            assert!(account.balance() >= Decimal::ZERO);
        }
        assert_eq!(account.balance(), dec!(0.0));
    }

    #[test]
    fn test_record_is_kind_tagged() {
        let mut account = standard_account();
        account.record(TransactionRecord::new(TransactionKind::Deposit, dec!(1.0)));
        assert_eq!(account.history().records()[0].kind.as_str(), "deposit");
    }
}
