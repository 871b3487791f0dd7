use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

use crate::alert::Alert;

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Get the alert rendered on the page, if any.
#[track_caller]
pub(crate) fn get_alert(html: &Html) -> Option<Alert> {
    let alert = html.select(&Selector::parse("#alert").unwrap()).next()?;
    let message = alert.text().collect::<String>().trim().to_owned();

    match alert.value().attr("role") {
        Some("status") => Some(Alert::Success(message)),
        Some("alert") => Some(Alert::Error(message)),
        role => panic!("want alert with role status or alert, got {role:?}"),
    }
}
