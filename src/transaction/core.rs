//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::{Decimal, RoundingStrategy};
use time::OffsetDateTime;

use super::{Category, ValidationError};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Money earned, e.g. a paycheck.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The lowercase name used in forms, query strings and the database.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The capitalised name for display to users.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::InvalidType),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created by a [TransactionStore](super::TransactionStore)
/// from a [NewTransaction] and never change once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction, unique within its store.
    pub id: TransactionId,
    /// Whether this transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, always positive and rounded to cents.
    pub amount: Decimal,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction happened, as entered by the user.
    ///
    /// Only used for sorting, so it is compared as text and never validated
    /// as a calendar date.
    pub date: String,
    /// When the transaction was added to the store.
    pub created_at: OffsetDateTime,
}

/// A validated transaction that has not been stored yet.
///
/// Construct with [NewTransaction::new] or
/// [TransactionForm::parse](super::TransactionForm::parse), which enforce a
/// non-empty description and date and a positive amount.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    transaction_type: TransactionType,
    description: String,
    amount: Decimal,
    category: Category,
    date: String,
}

impl NewTransaction {
    /// Validate the fields for a new transaction.
    ///
    /// `description` is trimmed and `amount` is rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns a:
    /// - [ValidationError::MissingField] if `description` is blank or `date` is empty,
    /// - [ValidationError::InvalidAmount] if `amount` is larger than [MAX_AMOUNT],
    /// - or [ValidationError::NonPositiveAmount] if `amount` rounds to zero or less.
    pub fn new(
        transaction_type: TransactionType,
        description: &str,
        amount: Decimal,
        category: Category,
        date: &str,
    ) -> Result<Self, ValidationError> {
        let description = description.trim();

        if description.is_empty() || date.is_empty() {
            return Err(ValidationError::MissingField);
        }

        Ok(Self {
            transaction_type,
            description: description.to_owned(),
            amount: validate_amount(amount)?,
            category,
            date: date.to_owned(),
        })
    }

    /// Whether the transaction is income or an expense.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// The trimmed description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount rounded to two decimal places.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The category of the transaction.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The date as entered by the user.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Turn this into a stored [Transaction] with the given `id` and creation time.
    pub(crate) fn into_transaction(
        self,
        id: TransactionId,
        created_at: OffsetDateTime,
    ) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
            created_at,
        }
    }
}

/// Round `amount` to cents, with halves rounded away from zero.
///
/// The result always has exactly two decimal places, so `12.5` becomes `12.50`.
pub(crate) fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// The largest amount a single transaction may have, one trillion dollars.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Round `amount` to cents and check that the result is positive and no
/// larger than [MAX_AMOUNT].
pub(crate) fn validate_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount > MAX_AMOUNT {
        return Err(ValidationError::InvalidAmount);
    }

    let rounded = round_amount(amount);

    if rounded <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }

    Ok(rounded)
}
