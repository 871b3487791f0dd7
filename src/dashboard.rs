//! This file defines the dashboard route and its view.
//!
//! The dashboard shows:
//! - Total income, total expenses and the balance over all transactions
//! - The most recent transactions

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{
    AppState, Error, SharedStore,
    alert::Alert,
    endpoints,
    flash::take_flash,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_currency},
    navigation::NavBar,
    transaction::{DEFAULT_RECENT_COUNT, Summary, Transaction, transactions_table},
};

/// The state needed for the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store to summarise.
    pub store: SharedStore,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display a page with the totals and the latest transactions.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let (summary, recent_transactions) = {
        let store = state
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        (store.summary()?, store.recent(DEFAULT_RECENT_COUNT)?)
    };

    let (jar, alert) = take_flash(jar);

    Ok((
        StatusCode::OK,
        jar,
        Html(dashboard_view(&summary, &recent_transactions, alert).into_string()),
    )
        .into_response())
}

fn dashboard_view(
    summary: &Summary,
    recent_transactions: &[Transaction],
    alert: Option<Alert>,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let balance_class = if summary.balance < Decimal::ZERO {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    };

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl space-y-6"
            {
                @if let Some(alert) = alert {
                    (alert.into_html())
                }

                section class="grid grid-cols-1 md:grid-cols-3 gap-4"
                {
                    (summary_card(
                        "total-income",
                        "Total Income",
                        summary.total_income,
                        "text-green-700 dark:text-green-300",
                    ))
                    (summary_card(
                        "total-expenses",
                        "Total Expenses",
                        summary.total_expenses,
                        "text-red-700 dark:text-red-300",
                    ))
                    (summary_card("balance", "Balance", summary.balance, balance_class))
                }

                section
                {
                    div class="flex justify-between items-baseline mb-4"
                    {
                        h3 class="text-xl font-semibold" { "Recent Transactions" }

                        a href=(endpoints::HISTORY_VIEW) class=(LINK_STYLE) { "View all" }
                    }

                    @if recent_transactions.is_empty() {
                        p class="text-gray-500 dark:text-gray-400"
                        {
                            "No transactions yet. "
                            a href=(endpoints::ADD_TRANSACTION) class=(LINK_STYLE)
                            {
                                "Add your first transaction"
                            }
                            "."
                        }
                    } @else {
                        (transactions_table(recent_transactions))
                    }
                }
            }
        }
    };

    base("Dashboard", &[], &content)
}

fn summary_card(id: &str, title: &str, amount: Decimal, amount_class: &str) -> Markup {
    html! {
        div
            id=(id)
            class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-4 shadow-md"
        {
            h4 class="text-lg font-semibold mb-3" { (title) }

            div class={ "text-3xl font-bold " (amount_class) }
            {
                (format_currency(amount))
            }
        }
    }
}
