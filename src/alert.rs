//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped into the `#alert-container` element of the page via
//! htmx's response targets.

use maud::{Markup, html};

/// A message shown in the alert container.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something the user did worked.
    Success {
        /// The headline.
        message: String,
        /// More information, may be empty.
        details: String,
    },
    /// Something the user did could not be done.
    Error {
        /// The headline.
        message: String,
        /// More information and how to fix it, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (message, details, container_style, role) = match self {
            Alert::Success { message, details } => (
                message,
                details,
                "flex items-start gap-3 p-4 mb-4 text-green-800 rounded-lg \
                bg-green-50 dark:bg-gray-800 dark:text-green-400 shadow-lg",
                "status",
            ),
            Alert::Error { message, details } => (
                message,
                details,
                "flex items-start gap-3 p-4 mb-4 text-red-800 rounded-lg \
                bg-red-50 dark:bg-gray-800 dark:text-red-400 shadow-lg",
                "alert",
            ),
        };

        html! {
            div class=(container_style) role=(role)
            {
                div class="flex-1"
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    class="ms-auto text-sm font-medium underline"
                    onclick="this.parentElement.remove()"
                    aria-label="Dismiss"
                {
                    "Dismiss"
                }
            }
        }
    }
}
