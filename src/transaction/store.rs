//! Defines the transaction store trait and the queries it answers.

use std::fmt::Debug;

use rust_decimal::Decimal;

use crate::Error;

use super::{Category, NewTransaction, Transaction, TransactionId, TransactionType};

/// The number of transactions shown on the dashboard.
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Handles the creation, querying and deletion of transactions.
///
/// Listings returned by [TransactionStore::recent] and [TransactionStore::list]
/// are sorted by date, newest first, with transactions on the same date kept
/// in the order they were added.
pub trait TransactionStore: Debug {
    /// Store a new transaction and assign it an ID that has never been used
    /// by this store, even if earlier transactions were deleted.
    fn add(&mut self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Total income, total expenses and the balance over all transactions.
    fn summary(&self) -> Result<Summary, Error>;

    /// Up to `count` transactions with the latest dates.
    fn recent(&self, count: usize) -> Result<Vec<Transaction>, Error>;

    /// The transactions that match `filter`.
    fn list(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, Error>;

    /// Remove every transaction with the ID `id` and return how many were
    /// removed. Deleting an ID that does not exist is not an error.
    fn delete(&mut self, id: TransactionId) -> Result<usize, Error>;

    /// The number of transactions in the store.
    fn count(&self) -> Result<usize, Error>;
}

/// Aggregate totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// The sum of all income.
    pub total_income: Decimal,
    /// The sum of all expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub balance: Decimal,
}

impl Summary {
    /// Sum up `transactions` by type.
    ///
    /// Totals that would exceed the range of [Decimal] saturate at
    /// [Decimal::MAX] instead of overflowing.
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let (total_income, total_expenses) = transactions.into_iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, expenses), transaction| match transaction.transaction_type {
                TransactionType::Income => (income.saturating_add(transaction.amount), expenses),
                TransactionType::Expense => (income, expenses.saturating_add(transaction.amount)),
            },
        );

        Self {
            total_income,
            total_expenses,
            balance: total_income.saturating_sub(total_expenses),
        }
    }
}

/// Restricts a listing to a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Only this category.
    Only(Category),
    /// A category name that does not exist, which matches nothing.
    Unknown,
}

impl CategoryFilter {
    /// Parse a query string value, where "all" selects every category.
    pub fn from_query_value(value: &str) -> Self {
        if value == "all" {
            return Self::All;
        }

        value.parse().map_or(Self::Unknown, Self::Only)
    }

    /// Whether `category` passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
            CategoryFilter::Unknown => false,
        }
    }
}

/// Restricts a listing to income or expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Both income and expenses.
    #[default]
    All,
    /// Only this type.
    Only(TransactionType),
    /// A type name that does not exist, which matches nothing.
    Unknown,
}

impl TypeFilter {
    /// Parse a query string value, where "all" selects both types.
    pub fn from_query_value(value: &str) -> Self {
        if value == "all" {
            return Self::All;
        }

        value.parse().map_or(Self::Unknown, Self::Only)
    }

    /// Whether `transaction_type` passes this filter.
    pub fn matches(self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => wanted == transaction_type,
            TypeFilter::Unknown => false,
        }
    }
}

/// Selects which transactions [TransactionStore::list] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionFilter {
    /// Restrict to a category.
    pub category: CategoryFilter,
    /// Restrict to income or expenses.
    pub transaction_type: TypeFilter,
}

impl TransactionFilter {
    /// Whether `transaction` passes both filters.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.category.matches(transaction.category)
            && self.transaction_type.matches(transaction.transaction_type)
    }

    /// Whether no transaction can pass this filter.
    pub fn matches_nothing(&self) -> bool {
        self.category == CategoryFilter::Unknown || self.transaction_type == TypeFilter::Unknown
    }
}

/// Sort by date with the newest first.
///
/// The sort is stable, so transactions with the same date stay in the order
/// they were added.
pub(crate) fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}
