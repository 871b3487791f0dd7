//! Defines the endpoint for adding a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of rejecting the whole request like axum::Form.
use axum_extra::extract::{Form, PrivateCookieJar};

use crate::{AppState, Error, SharedStore, alert::Alert, endpoints, flash::set_flash};

use super::TransactionForm;

/// The state needed to add a transaction.
#[derive(Debug, Clone)]
pub struct AddTransactionState {
    /// The store the new transaction is added to.
    pub store: SharedStore,
}

impl FromRef<AppState> for AddTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for adding a new transaction.
///
/// On success, redirects to the dashboard with a success message. If the form
/// is invalid, nothing is stored and the user is sent back to the form with
/// the reason as an error message.
pub async fn add_transaction_endpoint(
    State(state): State<AddTransactionState>,
    jar: PrivateCookieJar,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let new_transaction = match form.parse() {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::debug!("Rejected new transaction {form:?}: {error}");
            let jar = set_flash(jar, &Alert::error(error.to_string()))?;

            return Ok((jar, Redirect::to(endpoints::ADD_TRANSACTION)).into_response());
        }
    };

    let transaction = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .add(new_transaction)?;

    tracing::info!(
        "Added {} #{} of {} on {}",
        transaction.transaction_type,
        transaction.id,
        transaction.amount,
        transaction.date
    );

    let message = format!(
        "{} of ${:.2} added successfully!",
        transaction.transaction_type.label(),
        transaction.amount
    );
    let jar = set_flash(jar, &Alert::success(message))?;

    Ok((jar, Redirect::to(endpoints::DASHBOARD_VIEW)).into_response())
}
