//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, State},
    http::{HeaderMap, Uri, header::REFERER},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;

use crate::{AppState, Error, SharedStore, alert::Alert, endpoints, flash::set_flash};

use super::TransactionId;

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store to delete transactions from.
    store: SharedStore,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Redirects back to the page the request came from, or the history page if
/// that is unknown, with a success message. Deleting a transaction that does
/// not exist is treated the same as deleting one that does.
///
/// # Errors
///
/// Returns [Error::NotFound] if `transaction_id` is not a non-negative integer.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<String>,
    headers: HeaderMap,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let transaction_id = parse_transaction_id(&transaction_id).ok_or(Error::NotFound)?;

    let removed = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .delete(transaction_id)?;

    if removed == 0 {
        tracing::debug!("Transaction #{transaction_id} was already gone");
    } else {
        tracing::info!("Deleted transaction #{transaction_id}");
    }

    let jar = set_flash(jar, &Alert::success("Transaction deleted successfully!"))?;
    let redirect_path = referrer_path(&headers).unwrap_or_else(|| endpoints::HISTORY_VIEW.to_owned());

    Ok((jar, Redirect::to(&redirect_path)).into_response())
}

fn parse_transaction_id(text: &str) -> Option<TransactionId> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

/// The path and query of the `Referer` header, if it is present and refers
/// to a path on this site.
fn referrer_path(headers: &HeaderMap) -> Option<String> {
    let referrer = headers.get(REFERER)?.to_str().ok()?;
    let uri = referrer.parse::<Uri>().ok()?;
    let path = uri.path_and_query()?.as_str();

    (path.starts_with('/') && !path.starts_with("//")).then(|| path.to_owned())
}
