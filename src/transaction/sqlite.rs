//! Implements a SQLite backed transaction store.

use std::str::FromStr;

use rusqlite::{
    Connection, Row, params_from_iter,
    types::{Type, Value},
};
use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::Error;

use super::{
    CategoryFilter, NewTransaction, Summary, Transaction, TransactionFilter, TransactionId,
    TransactionStore, TypeFilter,
};

const SELECT_TRANSACTION: &str = "SELECT id, transaction_type, description, amount, category, date, created_at FROM \"transaction\"";

/// Stores transactions in a SQLite database so they survive restarts.
#[derive(Debug)]
pub struct SQLiteTransactionStore {
    connection: Connection,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`, creating the
    /// transaction table if it does not exist yet.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the table could not be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_transaction_table(&connection)?;

        Ok(Self { connection })
    }
}

fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    // AUTOINCREMENT stops SQLite from handing out the ID of a deleted row again.
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                transaction_type TEXT NOT NULL,
                description TEXT NOT NULL,
                amount TEXT NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let description = row.get(2)?;
    let amount: String = row.get(3)?;
    let category = row.get(4)?;
    let date = row.get(5)?;
    let created_at = row.get(6)?;

    let amount = Decimal::from_str(&amount).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(error))
    })?;

    Ok(Transaction {
        id,
        transaction_type,
        description,
        amount,
        category,
        date,
        created_at,
    })
}

impl TransactionStore for SQLiteTransactionStore {
    /// Insert a new transaction into the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is a SQL error.
    fn add(&mut self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let created_at = OffsetDateTime::now_utc();

        let transaction = self
            .connection
            .prepare(
                "INSERT INTO \"transaction\" (transaction_type, description, amount, category, date, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 RETURNING id, transaction_type, description, amount, category, date, created_at",
            )?
            .query_row(
                (
                    transaction.transaction_type(),
                    transaction.description(),
                    transaction.amount().to_string(),
                    transaction.category(),
                    transaction.date(),
                    created_at,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    fn summary(&self) -> Result<Summary, Error> {
        let transactions = self.list(TransactionFilter::default())?;

        Ok(Summary::from_transactions(&transactions))
    }

    fn recent(&self, count: usize) -> Result<Vec<Transaction>, Error> {
        let limit = i64::try_from(count).unwrap_or(i64::MAX);

        self.connection
            .prepare(&format!(
                "{SELECT_TRANSACTION} ORDER BY date DESC, id ASC LIMIT ?1"
            ))?
            .query_map([limit], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    fn list(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, Error> {
        if filter.matches_nothing() {
            return Ok(Vec::new());
        }

        let mut query_string_parts = vec![SELECT_TRANSACTION.to_owned()];
        let mut where_clause_parts = vec![];
        let mut query_parameters = vec![];

        if let CategoryFilter::Only(category) = filter.category {
            where_clause_parts.push(format!("category = ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(category.as_str().to_owned()));
        }

        if let TypeFilter::Only(transaction_type) = filter.transaction_type {
            where_clause_parts.push(format!(
                "transaction_type = ?{}",
                query_parameters.len() + 1
            ));
            query_parameters.push(Value::Text(transaction_type.as_str().to_owned()));
        }

        if !where_clause_parts.is_empty() {
            query_string_parts.push(String::from("WHERE ") + &where_clause_parts.join(" AND "));
        }

        query_string_parts.push("ORDER BY date DESC, id ASC".to_owned());

        let query_string = query_string_parts.join(" ");
        let params = params_from_iter(query_parameters.iter());

        self.connection
            .prepare(&query_string)?
            .query_map(params, map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    fn delete(&mut self, id: TransactionId) -> Result<usize, Error> {
        self.connection
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])
            .map_err(Error::from)
    }

    fn count(&self) -> Result<usize, Error> {
        let count: i64 =
            self.connection
                .query_row("SELECT COUNT(*) FROM \"transaction\"", [], |row| row.get(0))?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}
