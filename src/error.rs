//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};

use crate::{
    add_funds::{FlowAction, FlowPhase, PRESET_AMOUNTS},
    alert::Alert,
    error_page::InternalServerError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount was not a number, was zero or negative, or would push the
    /// balance past the largest representable number.
    ///
    /// The add funds flow checks the text before crediting the wallet, so
    /// through HTTP this only happens when the balance would overflow.
    #[error("\"{0}\" cannot be added to the wallet")]
    InvalidAmount(String),

    /// An add funds action was attempted while the modal was in a phase that
    /// does not allow it, e.g. confirming while the modal is closed.
    #[error("cannot {action} while the add funds flow is {phase}")]
    InvalidFlowTransition {
        /// The action that was attempted.
        action: FlowAction,
        /// The phase the flow was in.
        phase: FlowPhase,
    },

    /// The amount is not one of the preset amounts.
    #[error("{0} is not a preset amount")]
    UnknownPreset(u32),

    /// Could not acquire the wallet store lock
    #[error("could not acquire the wallet store lock")]
    StoreLockError,

    /// The snapshot could not be serialized as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::StoreLockError => InternalServerError::default().into_response(),
            Error::JSONSerializationError(_) => InternalServerError {
                description: "Could not read the wallet",
                fix: "Try refreshing the page.",
            }
            .into_response(),
            error => error.into_alert_response(),
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// The alert replaces the contents of the alert container regardless of
    /// how the requesting element swaps successful responses.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidAmount(text) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "\"{text}\" cannot be added to the wallet. Enter a number above \
                        zero that keeps the balance within range."
                    ),
                },
            ),
            Error::UnknownPreset(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Unknown preset".to_owned(),
                    details: format!(
                        "${amount} is not a preset amount. Choose one of {}.",
                        PRESET_AMOUNTS
                            .iter()
                            .map(|preset| format!("${preset}"))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                },
            ),
            Error::InvalidFlowTransition { action, phase } => (
                StatusCode::CONFLICT,
                Alert::Error {
                    message: "Could not update the add money form".to_owned(),
                    details: format!(
                        "Cannot {action} while the form is {phase}. \
                        Try refreshing the page."
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (
            status_code,
            HxReswap(SwapOption::InnerHtml),
            alert.into_html(),
        )
            .into_response()
    }
}
