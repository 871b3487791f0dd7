//! One-shot flash messages carried across a redirect in a private cookie.
//!
//! A handler that redirects stores an [Alert] with [set_flash]. The page that
//! is rendered next calls [take_flash], which reads the alert and removes the
//! cookie so the message is only shown once.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};

use crate::{Error, alert::Alert};

pub(crate) const FLASH_COOKIE: &str = "flash";

/// Add `alert` to the cookie jar so it is displayed on the next page.
///
/// # Errors
///
/// Returns [Error::FlashSerialization] if the alert cannot be encoded as JSON.
pub(crate) fn set_flash(jar: PrivateCookieJar, alert: &Alert) -> Result<PrivateCookieJar, Error> {
    let value = serde_json::to_string(alert)
        .map_err(|error| Error::FlashSerialization(error.to_string()))?;

    Ok(jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    ))
}

/// Take the flash message out of the cookie jar, if there is one.
///
/// The returned jar must be included in the response for the cookie to be
/// removed on the client side.
pub(crate) fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Alert>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let alert = serde_json::from_str(cookie.value())
        .inspect_err(|error| tracing::warn!("Discarding malformed flash cookie: {error}"))
        .ok();

    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), alert)
}
