//! Alert system for displaying success and error messages to users.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// A message to display to the user at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Alert {
    Success(String),
    Error(String),
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Alert::Success(message) | Alert::Error(message) => message,
        }
    }

    pub fn into_html(self) -> Markup {
        let (container_style, role) = match self {
            Alert::Success(_) => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                "status",
            ),
            Alert::Error(_) => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                "alert",
            ),
        };

        html! {
            div id="alert" class=(container_style) role=(role)
            {
                (self.message())
            }
        }
    }
}
