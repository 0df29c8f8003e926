//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/add-funds/preset/{amount}', use [format_endpoint].

/// The wallet screen.
pub const ROOT: &str = "/";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for reading the current wallet snapshot as JSON.
pub const SNAPSHOT_API: &str = "/api/snapshot";
/// The route for opening the add funds modal.
pub const OPEN_ADD_FUNDS: &str = "/api/add-funds/open";
/// The route for updating the amount typed into the add funds modal.
pub const ADD_FUNDS_AMOUNT: &str = "/api/add-funds/amount";
/// The route for choosing a preset amount in the add funds modal.
pub const ADD_FUNDS_PRESET: &str = "/api/add-funds/preset/{amount}";
/// The route for confirming the amount in the add funds modal.
pub const CONFIRM_ADD_FUNDS: &str = "/api/add-funds/confirm";
/// The route for closing the add funds modal without adding money.
pub const DISMISS_ADD_FUNDS: &str = "/api/add-funds/dismiss";
/// The route for showing or hiding the balance.
pub const BALANCE_VISIBILITY: &str = "/api/balance/visibility";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
