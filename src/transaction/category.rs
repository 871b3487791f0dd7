//! The fixed set of categories a transaction can be filed under.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use super::ValidationError;

/// A classification for a transaction, e.g. "Salary" or "Food & Dining".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Groceries, restaurants and takeaways.
    FoodAndDining,
    /// Public transport, fuel and parking.
    Transportation,
    /// Power, water, internet and phone bills.
    Utilities,
    /// Movies, games and subscriptions.
    Entertainment,
    /// Doctor visits, prescriptions and insurance.
    Healthcare,
    /// Clothes, electronics and household goods.
    Shopping,
    /// Flights, accommodation and holidays.
    Travel,
    /// Tuition, courses and books.
    Education,
    /// Wages from employment.
    Salary,
    /// Income from contract work.
    Freelance,
    /// Dividends, interest and investment returns.
    Investment,
    /// Money given or received as a gift.
    Gift,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 13] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
        Category::Travel,
        Category::Education,
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::Gift,
        Category::Other,
    ];

    /// The display name, which is also how the category is sent in forms and stored.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::Education => "Education",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investment => "Investment",
            Category::Gift => "Gift",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parse a category from its exact display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(ValidationError::InvalidCategory)
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}
