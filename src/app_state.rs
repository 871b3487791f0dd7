//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::transaction::TransactionStore;

/// A transaction store shared between request handlers.
///
/// Every store operation must hold the lock for its whole duration so that
/// id assignment and insertion cannot interleave between requests.
pub type SharedStore = Arc<Mutex<dyn TransactionStore + Send>>;

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The store holding the user's transactions.
    pub store: SharedStore,
}

impl AppState {
    /// Create a new [AppState] that owns `store`.
    ///
    /// `session_secret` is hashed to derive the key for the flash message cookies.
    pub fn new(session_secret: &str, store: impl TransactionStore + Send + 'static) -> Self {
        Self {
            cookie_key: create_cookie_key(session_secret),
            store: Arc::new(Mutex::new(store)),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
