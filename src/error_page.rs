//! Full page views for requests that cannot be served: unknown paths and
//! internal errors.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The page shown when something went wrong on the server.
pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        let page = error_view("Internal Server Error", "500", self.description, self.fix);

        (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
    }
}

/// The page shown for paths that do not exist.
pub struct NotFound;

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        let page = error_view(
            "Not Found",
            "404",
            "Page not found.",
            "The wallet lives on the home page.",
        );

        (StatusCode::NOT_FOUND, page).into_response()
    }
}

/// Fallback route handler for unknown paths.
pub async fn get_404_not_found() -> Response {
    NotFound.into_response()
}
