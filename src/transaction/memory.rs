//! Implements a transaction store that keeps everything in memory.

use time::OffsetDateTime;

use crate::Error;

use super::{
    NewTransaction, Summary, Transaction, TransactionFilter, TransactionId, TransactionStore,
    store::sort_newest_first,
};

/// Stores transactions in a [Vec] in insertion order.
///
/// All data is lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryTransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl InMemoryTransactionStore {
    /// Create an empty store whose first transaction will have the ID 1.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn add(&mut self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = transaction.into_transaction(self.next_id, OffsetDateTime::now_utc());
        self.next_id += 1;
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn summary(&self) -> Result<Summary, Error> {
        Ok(Summary::from_transactions(&self.transactions))
    }

    fn recent(&self, count: usize) -> Result<Vec<Transaction>, Error> {
        let mut transactions = self.transactions.clone();
        sort_newest_first(&mut transactions);
        transactions.truncate(count);

        Ok(transactions)
    }

    fn list(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, Error> {
        let mut transactions = self
            .transactions
            .iter()
            .filter(|transaction| filter.matches(transaction))
            .cloned()
            .collect::<Vec<_>>();
        sort_newest_first(&mut transactions);

        Ok(transactions)
    }

    fn delete(&mut self, id: TransactionId) -> Result<usize, Error> {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        Ok(count_before - self.transactions.len())
    }

    fn count(&self) -> Result<usize, Error> {
        Ok(self.transactions.len())
    }
}
