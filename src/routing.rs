//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        add_transaction_endpoint, delete_transaction_endpoint, get_add_transaction_page,
        get_history_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::ADD_TRANSACTION,
            get(get_add_transaction_page).post(add_transaction_endpoint),
        )
        .route(endpoints::HISTORY_VIEW, get(get_history_page))
        .route(
            endpoints::DELETE_TRANSACTION,
            get(delete_transaction_endpoint),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, StatusCode, header};
    use axum_test::TestServer;
    use scraper::Html;

    use crate::{
        AppState,
        alert::Alert,
        endpoints,
        flash::FLASH_COOKIE,
        test_utils::{assert_valid_html, get_alert},
        transaction::{InMemoryTransactionStore, TransactionForm},
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new("test secret", InMemoryTransactionStore::new());

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn paycheck_form() -> TransactionForm {
        TransactionForm {
            transaction_type: Some("income".to_owned()),
            description: Some("Paycheck".to_owned()),
            amount: Some("1000".to_owned()),
            category: Some("Salary".to_owned()),
            date: Some("2024-01-01".to_owned()),
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert!(response.text().contains("Page not found"));
    }

    #[tokio::test]
    async fn every_page_renders() {
        let server = get_test_server();

        for endpoint in [
            endpoints::DASHBOARD_VIEW,
            endpoints::ADD_TRANSACTION,
            endpoints::HISTORY_VIEW,
        ] {
            let response = server.get(endpoint).await;

            response.assert_status_ok();
            let html = Html::parse_document(&response.text());
            assert_valid_html(&html);
        }
    }

    #[tokio::test]
    async fn added_transaction_is_flashed_once_on_dashboard() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ADD_TRANSACTION)
            .form(&paycheck_form())
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(header::LOCATION), endpoints::DASHBOARD_VIEW);
        let flash_cookie = response.cookie(FLASH_COOKIE);

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_cookie(flash_cookie.clone())
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_eq!(
            get_alert(&html),
            Some(Alert::success("Income of $1000.00 added successfully!"))
        );
        assert!(response.text().contains("Paycheck"));

        let removal = response.cookie(FLASH_COOKIE);
        assert_eq!(removal.value(), "");
    }

    #[tokio::test]
    async fn invalid_transaction_is_flashed_on_form() {
        let server = get_test_server();
        let form = TransactionForm {
            amount: Some("abc".to_owned()),
            ..paycheck_form()
        };

        let response = server.post(endpoints::ADD_TRANSACTION).form(&form).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(header::LOCATION), endpoints::ADD_TRANSACTION);

        let response = server
            .get(endpoints::ADD_TRANSACTION)
            .add_cookie(response.cookie(FLASH_COOKIE))
            .await;

        let html = Html::parse_document(&response.text());
        assert_eq!(
            get_alert(&html),
            Some(Alert::error("Invalid amount. Please enter a valid number."))
        );
    }

    #[tokio::test]
    async fn oversized_amounts_are_rejected_and_dashboard_still_renders() {
        let server = get_test_server();
        let form = TransactionForm {
            amount: Some("50000000000000000000000000000".to_owned()),
            ..paycheck_form()
        };

        for _ in 0..2 {
            let response = server.post(endpoints::ADD_TRANSACTION).form(&form).await;

            response.assert_status(StatusCode::SEE_OTHER);
            assert_eq!(response.header(header::LOCATION), endpoints::ADD_TRANSACTION);
        }

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("No transactions yet."));
    }

    #[tokio::test]
    async fn delete_redirects_back_to_referrer() {
        let server = get_test_server();
        server
            .post(endpoints::ADD_TRANSACTION)
            .form(&paycheck_form())
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let response = server
            .get("/delete_transaction/1")
            .add_header(
                header::REFERER,
                HeaderValue::from_static("http://localhost/history?type=income"),
            )
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(header::LOCATION), "/history?type=income");

        let response = server
            .get("/history?type=income")
            .add_cookie(response.cookie(FLASH_COOKIE))
            .await;
        assert!(response.text().contains("No transactions found."));
        assert!(response.text().contains("Transaction deleted successfully!"));
    }

    #[tokio::test]
    async fn delete_with_non_integer_id_is_not_found() {
        let server = get_test_server();

        let response = server.get("/delete_transaction/abc").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
