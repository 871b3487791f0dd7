//! Builders and store checks shared by the transaction tests.
//!
//! Each check takes an empty store so that every [TransactionStore]
//! implementation can be held to the same behaviour.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use time::OffsetDateTime;

use super::{
    Category, CategoryFilter, MAX_AMOUNT, NewTransaction, Summary, Transaction, TransactionFilter,
    TransactionId, TransactionStore, TransactionType, TypeFilter,
};

pub fn new_transaction(
    transaction_type: TransactionType,
    amount: Decimal,
    category: Category,
    date: &str,
) -> NewTransaction {
    NewTransaction::new(transaction_type, "Test", amount, category, date).unwrap()
}

pub fn income(id: TransactionId, amount: Decimal, category: Category, date: &str) -> Transaction {
    new_transaction(TransactionType::Income, amount, category, date)
        .into_transaction(id, OffsetDateTime::UNIX_EPOCH)
}

pub fn expense(id: TransactionId, amount: Decimal, category: Category, date: &str) -> Transaction {
    new_transaction(TransactionType::Expense, amount, category, date)
        .into_transaction(id, OffsetDateTime::UNIX_EPOCH)
}

fn ids(transactions: &[Transaction]) -> Vec<TransactionId> {
    transactions.iter().map(|transaction| transaction.id).collect()
}

pub fn add_assigns_sequential_ids(mut store: impl TransactionStore) {
    let first = store
        .add(new_transaction(
            TransactionType::Income,
            dec!(1000),
            Category::Salary,
            "2024-01-01",
        ))
        .unwrap();
    let second = store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(20),
            Category::FoodAndDining,
            "2024-01-02",
        ))
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.transaction_type, TransactionType::Income);
    assert_eq!(first.description, "Test");
    assert_eq!(first.category, Category::Salary);
    assert_eq!(first.date, "2024-01-01");
    assert_eq!(store.count().unwrap(), 2);
}

pub fn add_rounds_amount(mut store: impl TransactionStore) {
    let transaction = store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(45.999),
            Category::FoodAndDining,
            "2024-01-01",
        ))
        .unwrap();

    assert_eq!(transaction.amount, dec!(46.00));
    assert_eq!(store.recent(1).unwrap()[0].amount, dec!(46.00));
}

pub fn summary_totals_by_type(mut store: impl TransactionStore) {
    for transaction in [
        new_transaction(
            TransactionType::Income,
            dec!(1000),
            Category::Salary,
            "2024-01-01",
        ),
        new_transaction(
            TransactionType::Expense,
            dec!(45.50),
            Category::FoodAndDining,
            "2024-01-02",
        ),
        new_transaction(
            TransactionType::Expense,
            dec!(100),
            Category::Utilities,
            "2024-01-03",
        ),
    ] {
        store.add(transaction).unwrap();
    }

    let summary = store.summary().unwrap();

    assert_eq!(
        summary,
        Summary {
            total_income: dec!(1000),
            total_expenses: dec!(145.50),
            balance: dec!(854.50),
        }
    );
}

pub fn summary_of_empty_store_is_zero(store: impl TransactionStore) {
    assert_eq!(store.summary().unwrap(), Summary::default());
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.recent(5).unwrap().is_empty());
}

pub fn summary_of_largest_amounts_is_exact(mut store: impl TransactionStore) {
    for _ in 0..3 {
        store
            .add(new_transaction(
                TransactionType::Income,
                MAX_AMOUNT,
                Category::Investment,
                "2024-01-01",
            ))
            .unwrap();
    }
    store
        .add(new_transaction(
            TransactionType::Expense,
            MAX_AMOUNT,
            Category::Travel,
            "2024-01-02",
        ))
        .unwrap();

    let summary = store.summary().unwrap();

    assert_eq!(summary.total_income, dec!(3_000_000_000_000));
    assert_eq!(summary.total_expenses, dec!(1_000_000_000_000));
    assert_eq!(summary.balance, dec!(2_000_000_000_000));
}

pub fn recent_returns_latest_dates_first(mut store: impl TransactionStore) {
    store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(10),
            Category::Other,
            "2024-01-01",
        ))
        .unwrap();
    let later = store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(20),
            Category::Other,
            "2024-03-01",
        ))
        .unwrap();
    store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(30),
            Category::Other,
            "2024-02-01",
        ))
        .unwrap();

    assert_eq!(store.recent(1).unwrap(), vec![later]);
    assert_eq!(ids(&store.recent(5).unwrap()), vec![2, 3, 1]);
}

pub fn recent_is_capped_at_count(mut store: impl TransactionStore) {
    for day in 1..=7 {
        store
            .add(new_transaction(
                TransactionType::Expense,
                dec!(1),
                Category::Other,
                &format!("2024-01-0{day}"),
            ))
            .unwrap();
    }

    let recent = store.recent(5).unwrap();

    assert_eq!(ids(&recent), vec![7, 6, 5, 4, 3]);
    assert!(store.recent(0).unwrap().is_empty());
}

pub fn same_date_keeps_insertion_order(mut store: impl TransactionStore) {
    for date in ["2024-01-01", "2024-01-02", "2024-01-01", "2024-01-02"] {
        store
            .add(new_transaction(
                TransactionType::Expense,
                dec!(1),
                Category::Other,
                date,
            ))
            .unwrap();
    }

    assert_eq!(ids(&store.recent(5).unwrap()), vec![2, 4, 1, 3]);
    assert_eq!(
        ids(&store.list(TransactionFilter::default()).unwrap()),
        vec![2, 4, 1, 3]
    );
}

pub fn list_filters_by_category_and_type(mut store: impl TransactionStore) {
    for transaction in [
        new_transaction(
            TransactionType::Income,
            dec!(1000),
            Category::Salary,
            "2024-01-01",
        ),
        new_transaction(
            TransactionType::Expense,
            dec!(20),
            Category::FoodAndDining,
            "2024-01-02",
        ),
        new_transaction(
            TransactionType::Expense,
            dec!(30),
            Category::FoodAndDining,
            "2024-01-03",
        ),
        new_transaction(
            TransactionType::Income,
            dec!(50),
            Category::FoodAndDining,
            "2024-01-04",
        ),
    ] {
        store.add(transaction).unwrap();
    }

    let by_category = store
        .list(TransactionFilter {
            category: CategoryFilter::Only(Category::FoodAndDining),
            transaction_type: TypeFilter::All,
        })
        .unwrap();
    assert_eq!(ids(&by_category), vec![4, 3, 2]);

    let by_type = store
        .list(TransactionFilter {
            category: CategoryFilter::All,
            transaction_type: TypeFilter::Only(TransactionType::Income),
        })
        .unwrap();
    assert_eq!(ids(&by_type), vec![4, 1]);

    let by_both = store
        .list(TransactionFilter {
            category: CategoryFilter::Only(Category::FoodAndDining),
            transaction_type: TypeFilter::Only(TransactionType::Expense),
        })
        .unwrap();
    assert_eq!(ids(&by_both), vec![3, 2]);

    let everything = store.list(TransactionFilter::default()).unwrap();
    assert_eq!(ids(&everything), vec![4, 3, 2, 1]);
}

pub fn list_with_unknown_filter_is_empty(mut store: impl TransactionStore) {
    store
        .add(new_transaction(
            TransactionType::Income,
            dec!(1000),
            Category::Salary,
            "2024-01-01",
        ))
        .unwrap();

    let transactions = store
        .list(TransactionFilter {
            category: CategoryFilter::Unknown,
            transaction_type: TypeFilter::All,
        })
        .unwrap();

    assert!(transactions.is_empty());
}

pub fn delete_removes_transaction(mut store: impl TransactionStore) {
    let paycheck = store
        .add(new_transaction(
            TransactionType::Income,
            dec!(1000),
            Category::Salary,
            "2024-01-01",
        ))
        .unwrap();
    let lunch = store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(20),
            Category::FoodAndDining,
            "2024-01-02",
        ))
        .unwrap();

    let removed = store.delete(paycheck.id).unwrap();

    assert_eq!(removed, 1);
    assert_eq!(store.recent(5).unwrap(), vec![lunch]);
    assert_eq!(store.summary().unwrap().total_income, Decimal::ZERO);
    assert_eq!(store.summary().unwrap().balance, dec!(-20));
}

pub fn delete_missing_id_is_noop(mut store: impl TransactionStore) {
    let paycheck = store
        .add(new_transaction(
            TransactionType::Income,
            dec!(1000),
            Category::Salary,
            "2024-01-01",
        ))
        .unwrap();

    assert_eq!(store.delete(paycheck.id).unwrap(), 1);
    assert_eq!(store.delete(paycheck.id).unwrap(), 0);
    assert_eq!(store.delete(999).unwrap(), 0);
    assert_eq!(store.count().unwrap(), 0);
}

pub fn ids_are_not_reused_after_delete(mut store: impl TransactionStore) {
    store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(1),
            Category::Other,
            "2024-01-01",
        ))
        .unwrap();
    let second = store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(2),
            Category::Other,
            "2024-01-02",
        ))
        .unwrap();

    store.delete(second.id).unwrap();
    let third = store
        .add(new_transaction(
            TransactionType::Expense,
            dec!(3),
            Category::Other,
            "2024-01-03",
        ))
        .unwrap();

    assert_eq!(third.id, 3);
}
