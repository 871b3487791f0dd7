//! Validation of the raw form data submitted when adding a transaction.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, NewTransaction, TransactionType, core::validate_amount};

/// The reasons a new transaction can be rejected.
///
/// The display text of each variant is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field was missing or empty.
    #[error("All fields are required.")]
    MissingField,

    /// The amount could not be parsed as a number, or was larger than
    /// [MAX_AMOUNT](super::MAX_AMOUNT).
    #[error("Invalid amount. Please enter a valid number.")]
    InvalidAmount,

    /// The amount was zero or negative after rounding to cents.
    #[error("Amount must be greater than 0.")]
    NonPositiveAmount,

    /// The transaction type was not "income" or "expense".
    #[error("Invalid transaction type.")]
    InvalidType,

    /// The category was not one of the fixed categories.
    #[error("Invalid category.")]
    InvalidCategory,
}

/// The form data for adding a transaction.
///
/// Every field is optional so that a missing field can be reported with a
/// friendly message instead of a rejected request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// The value of the transaction in dollars.
    pub amount: Option<String>,
    /// The display name of the category.
    pub category: Option<String>,
    /// When the transaction occurred.
    pub date: Option<String>,
}

impl TransactionForm {
    /// Validate the form and convert it into a [NewTransaction].
    ///
    /// The checks run in a fixed order and the first failure is returned:
    /// missing fields, then the amount, then the type, then the category.
    ///
    /// # Errors
    ///
    /// Returns the [ValidationError] for the first check that fails.
    pub fn parse(&self) -> Result<NewTransaction, ValidationError> {
        let (Some(transaction_type), Some(description), Some(amount), Some(category), Some(date)) = (
            non_empty(&self.transaction_type),
            non_empty(&self.description).map(str::trim).filter(|text| !text.is_empty()),
            non_empty(&self.amount),
            non_empty(&self.category),
            non_empty(&self.date),
        ) else {
            return Err(ValidationError::MissingField);
        };

        let amount = parse_amount(amount)?;
        let transaction_type = TransactionType::from_str(transaction_type)?;
        let category = Category::from_str(category)?;

        NewTransaction::new(transaction_type, description, amount, category, date)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

/// Parse a decimal amount, allowing surrounding whitespace and scientific
/// notation such as "1e3".
fn parse_amount(text: &str) -> Result<Decimal, ValidationError> {
    let text = text.trim();

    let amount = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ValidationError::InvalidAmount)?;

    validate_amount(amount)
}
