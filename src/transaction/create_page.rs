//! Defines the route handler for the page for adding a new transaction.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    alert::Alert,
    endpoints,
    flash::take_flash,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        dollar_input_styles,
    },
    navigation::NavBar,
};

use super::{Category, MAX_AMOUNT, TransactionType};

fn add_transaction_view(today: Date, alert: Option<Alert>) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_TRANSACTION).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            @if let Some(alert) = alert {
                (alert.into_html())
            }

            form
                method="post"
                action=(endpoints::ADD_TRANSACTION)
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Add Transaction" }

                fieldset
                {
                    legend class=(FORM_LABEL_STYLE) { "Type" }

                    div class=(FORM_RADIO_GROUP_STYLE)
                    {
                        @for transaction_type in [TransactionType::Expense, TransactionType::Income] {
                            div class="flex items-center gap-2"
                            {
                                input
                                    type="radio"
                                    name="type"
                                    id={ "type-" (transaction_type) }
                                    value=(transaction_type)
                                    checked[transaction_type == TransactionType::Expense]
                                    required
                                    class=(FORM_RADIO_INPUT_STYLE);

                                label
                                    for={ "type-" (transaction_type) }
                                    class=(FORM_RADIO_LABEL_STYLE)
                                {
                                    (transaction_type.label())
                                }
                            }
                        }
                    }
                }

                div
                {
                    label
                        for="description"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Description"
                    }

                    input
                        name="description"
                        id="description"
                        type="text"
                        placeholder="e.g. Groceries"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount"
                    }

                    // w-full needed to ensure input takes the full width when prefilled with a value
                    div class="input-wrapper w-full"
                    {
                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            max=(MAX_AMOUNT)
                            placeholder="0.00"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label
                        for="category"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Category"
                    }

                    select
                        name="category"
                        id="category"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" { "Select a category" }

                        @for category in Category::ALL {
                            option value=(category) { (category) }
                        }
                    }
                }

                div
                {
                    label
                        for="date"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Date"
                    }

                    input
                        name="date"
                        id="date"
                        type="date"
                        required
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Add Transaction"
                }
            }
        }
    };

    base("Add Transaction", &[dollar_input_styles()], &content)
}

/// Renders the page for adding a transaction, showing any pending flash message.
pub async fn get_add_transaction_page(jar: PrivateCookieJar) -> Response {
    let (jar, alert) = take_flash(jar);
    let today = OffsetDateTime::now_utc().date();

    (
        StatusCode::OK,
        jar,
        Html(add_transaction_view(today, alert).into_string()),
    )
        .into_response()
}
