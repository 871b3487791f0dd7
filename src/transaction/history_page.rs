//! Defines the route handler for the page listing every transaction.

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, SharedStore,
    alert::Alert,
    endpoints,
    flash::take_flash,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

use super::{
    Category, CategoryFilter, Transaction, TransactionFilter, TransactionType, TypeFilter,
    transactions_table,
};

/// The state needed for the history page.
#[derive(Debug, Clone)]
pub struct HistoryPageState {
    /// The store to list transactions from.
    pub store: SharedStore,
}

impl FromRef<AppState> for HistoryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The query parameters for filtering the history page.
///
/// A missing parameter is the same as "all".
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// The display name of a category, or "all".
    pub category: Option<String>,
    /// "income", "expense" or "all".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
}

impl HistoryQuery {
    fn selected_category(&self) -> &str {
        self.category.as_deref().unwrap_or("all")
    }

    fn selected_type(&self) -> &str {
        self.transaction_type.as_deref().unwrap_or("all")
    }

    fn filter(&self) -> TransactionFilter {
        TransactionFilter {
            category: CategoryFilter::from_query_value(self.selected_category()),
            transaction_type: TypeFilter::from_query_value(self.selected_type()),
        }
    }
}

/// Renders every transaction that matches the query, newest first.
pub async fn get_history_page(
    State(state): State<HistoryPageState>,
    Query(query): Query<HistoryQuery>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let transactions = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .list(query.filter())?;

    let (jar, alert) = take_flash(jar);

    Ok((
        StatusCode::OK,
        jar,
        Html(history_view(&transactions, &query, alert).into_string()),
    )
        .into_response())
}

fn history_view(transactions: &[Transaction], query: &HistoryQuery, alert: Option<Alert>) -> Markup {
    let nav_bar = NavBar::new(endpoints::HISTORY_VIEW).into_html();
    let selected_category = query.selected_category();
    let selected_type = query.selected_type();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl space-y-4"
            {
                @if let Some(alert) = alert {
                    (alert.into_html())
                }

                h2 class="text-xl font-bold" { "Transaction History" }

                form
                    method="get"
                    action=(endpoints::HISTORY_VIEW)
                    class="flex flex-wrap items-end gap-4"
                {
                    div
                    {
                        label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                        select name="category" id="category" class=(FORM_TEXT_INPUT_STYLE)
                        {
                            option value="all" selected[selected_category == "all"] { "All Categories" }

                            @for category in Category::ALL {
                                option
                                    value=(category)
                                    selected[selected_category == category.as_str()]
                                {
                                    (category)
                                }
                            }
                        }
                    }

                    div
                    {
                        label for="type" class=(FORM_LABEL_STYLE) { "Type" }

                        select name="type" id="type" class=(FORM_TEXT_INPUT_STYLE)
                        {
                            option value="all" selected[selected_type == "all"] { "All Types" }

                            @for transaction_type in [TransactionType::Income, TransactionType::Expense] {
                                option
                                    value=(transaction_type)
                                    selected[selected_type == transaction_type.as_str()]
                                {
                                    (transaction_type.label())
                                }
                            }
                        }
                    }

                    div
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter" }
                    }
                }

                @if transactions.is_empty() {
                    p class="text-gray-500 dark:text-gray-400" { "No transactions found." }
                } @else {
                    (transactions_table(transactions))
                }
            }
        }
    };

    base("History", &[], &content)
}
