//! Transaction management for the budgeting application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model, its `Category` and validation of new transactions
//! - The `TransactionStore` trait and its in-memory and SQLite backends
//! - View handlers for adding, listing and deleting transactions

mod category;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod history_page;
mod memory;
mod sqlite;
mod store;
mod table;
mod validation;

#[cfg(test)]
mod test_utils;

pub use category::Category;
pub use core::{MAX_AMOUNT, NewTransaction, Transaction, TransactionId, TransactionType};
pub use create_endpoint::add_transaction_endpoint;
pub use create_page::get_add_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use history_page::get_history_page;
pub use memory::InMemoryTransactionStore;
pub use sqlite::SQLiteTransactionStore;
pub use store::{
    CategoryFilter, DEFAULT_RECENT_COUNT, Summary, TransactionFilter, TransactionStore,
    TypeFilter,
};
pub use table::transactions_table;
pub use validation::{TransactionForm, ValidationError};
