//! Bankroll ledger operations.

use crate::{BankrollTransaction, Engine, TransactionDraft};

impl Engine {
    /// Return a page of ledger entries ordered by date, newest first.
    pub fn transactions(&self, limit: usize, offset: usize) -> Vec<BankrollTransaction> {
        let mut transactions: Vec<BankrollTransaction> =
            self.bankroll.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions.into_iter().skip(offset).take(limit).collect()
    }

    /// Post a ledger entry, stamping id and date server-side.
    pub fn new_transaction(&mut self, draft: TransactionDraft) -> BankrollTransaction {
        let transaction = BankrollTransaction::new(draft);
        self.bankroll.insert(transaction.id, transaction.clone());
        transaction
    }
}
