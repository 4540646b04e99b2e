use crate::account::{Account, AccountKind};
use crate::client::Client;
use crate::error::{LedgerError, Result};
use crate::transaction::Transaction;

/// The top-level aggregate owning every client and account for the process
/// lifetime. Accounts are numbered sequentially from 1 in opening order.
#[derive(Debug, Default)]
pub struct Bank {
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new client. Tax ids are unique across the bank.
    pub fn register_client(&mut self, client: Client) -> Result<()> {
        if self.clients.iter().any(|c| c.tax_id == client.tax_id) {
            return Err(LedgerError::ClientAlreadyRegistered(client.tax_id.clone()));
        }
        self.clients.push(client);
        Ok(())
    }

    /// Opens an account for an existing client and returns its number.
    ///
    /// The account is appended to both the bank's collection and the
    /// client's own list.
    pub fn open_account(&mut self, tax_id: &str, kind: AccountKind) -> Result<u32> {
        let number = self.accounts.len() as u32 + 1;
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.tax_id == tax_id)
            .ok_or_else(|| LedgerError::UnknownClient(tax_id.to_string()))?;
        client.add_account(number);
        self.accounts.push(Account::new(number, tax_id.to_string(), kind));
        Ok(number)
    }

    pub fn client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.tax_id == tax_id)
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Executes a transaction against an explicitly selected account.
    ///
    /// Resolves the client and checks account ownership, then lets the
    /// client mediate the execution.
    pub fn execute_transaction(
        &mut self,
        tax_id: &str,
        account_number: u32,
        transaction: &Transaction,
    ) -> Result<()> {
        let client = self
            .clients
            .iter()
            .find(|c| c.tax_id == tax_id)
            .ok_or_else(|| LedgerError::UnknownClient(tax_id.to_string()))?;
        if !client.accounts().contains(&account_number) {
            return Err(LedgerError::NoAccountForClient {
                client: tax_id.to_string(),
                number: account_number,
            });
        }
        let Some(account) = self.accounts.iter_mut().find(|a| a.number() == account_number)
        else {
            return Err(LedgerError::NoAccountForClient {
                client: tax_id.to_string(),
                number: account_number,
            });
        };
        client.execute_transaction(account, transaction)
    }
}
