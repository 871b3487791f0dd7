//! The endpoint URIs served by the application.
//!
//! For endpoints that take a parameter, e.g., '/delete_transaction/{transaction_id}',
//! use [format_endpoint].

/// The dashboard with the summary cards and the most recent transactions.
pub const DASHBOARD_VIEW: &str = "/";
/// The page with the form for adding a transaction, and the route the form posts to.
pub const ADD_TRANSACTION: &str = "/add_transaction";
/// The page listing every transaction, with optional filters.
pub const HISTORY_VIEW: &str = "/history";
/// The route for deleting a single transaction.
pub const DELETE_TRANSACTION: &str = "/delete_transaction/{transaction_id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is the text from a left brace up to and including the next
/// right brace, e.g. '{transaction_id}' in '/delete_transaction/{transaction_id}'.
/// Only the first parameter is replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{id}{}",
        &endpoint_path[..param_start],
        &endpoint_path[param_end..]
    )
}
