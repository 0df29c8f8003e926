//! Route handlers for the wallet screen.
//!
//! Each handler applies one user event to the [WalletStore](crate::store::WalletStore)
//! and renders the part of the screen that changed. Requests that do not come
//! from htmx, i.e. plain form submissions, are redirected back to the wallet
//! page instead.

use axum::{
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRequest;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::Alert,
    endpoints,
    html::format_currency,
    wallet_page::view::{add_funds_modal, confirm_button, wallet_page_view, wallet_screen_view},
};

/// The form data sent while typing in, or submitting, the add funds form.
#[derive(Debug, Deserialize)]
pub struct AmountForm {
    /// The raw text of the amount field.
    #[serde(default)]
    pub amount_text: Option<String>,
}

/// Renders the wallet page.
pub async fn get_wallet_page(State(state): State<AppState>) -> Result<Response, Error> {
    let snapshot = state.lock_store()?.snapshot();

    Ok(wallet_page_view(&snapshot, &state.animation).into_response())
}

/// Returns the current snapshot as JSON.
pub async fn get_snapshot(State(state): State<AppState>) -> Result<Response, Error> {
    let snapshot = state.lock_store()?.snapshot();

    let json = serde_json::to_string(&snapshot).map_err(|error| {
        tracing::error!("could not serialize wallet snapshot: {error}");
        Error::JSONSerializationError(error.to_string())
    })?;

    Ok(([(CONTENT_TYPE, "application/json")], json).into_response())
}

/// Opens the add funds modal.
pub async fn open_add_funds_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let result = state.lock_store().and_then(|mut store| store.open());

    match result {
        Ok(snapshot) => respond(is_htmx, wallet_screen_view(&snapshot, &state.animation)),
        Err(error) => error.into_alert_response(),
    }
}

/// Stores the text typed into the amount field and re-renders the confirm
/// button so that it is only enabled for valid amounts.
pub async fn update_amount_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<AmountForm>,
) -> Response {
    let text = form.amount_text.unwrap_or_default();
    let result = state
        .lock_store()
        .and_then(|mut store| store.set_amount_text(&text));

    match result {
        Ok(snapshot) => respond(is_htmx, confirm_button(snapshot.flow.is_valid)),
        Err(error) => error.into_alert_response(),
    }
}

/// Fills the amount field with a preset amount.
pub async fn select_preset_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Path(amount): Path<u32>,
) -> Response {
    let result = state
        .lock_store()
        .and_then(|mut store| store.select_preset(amount));

    match result {
        Ok(snapshot) => respond(is_htmx, add_funds_modal(&snapshot.flow, &state.animation)),
        Err(error) => error.into_alert_response(),
    }
}

/// Adds the amount in the add funds form to the wallet.
///
/// The submitted amount text, if any, is stored first so that the latest
/// input is used even if the last keystroke has not been sent yet. Invalid
/// amounts leave the modal open and the wallet unchanged.
pub async fn confirm_add_funds_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<AmountForm>,
) -> Response {
    let result = state.lock_store().and_then(|mut store| {
        if let Some(text) = &form.amount_text {
            store.set_amount_text(text)?;
        }

        store.confirm()
    });

    match result {
        Ok((Some(transaction), snapshot)) => {
            let alert = Alert::Success {
                message: format!("Added {}", format_currency(transaction.amount)),
                details: String::new(),
            };

            respond(
                is_htmx,
                html! {
                    (wallet_screen_view(&snapshot, &state.animation))

                    div id="alert-container" hx-swap-oob="innerHTML" { (alert.into_html()) }
                },
            )
        }
        Ok((None, snapshot)) => respond(is_htmx, wallet_screen_view(&snapshot, &state.animation)),
        Err(error) => error.into_alert_response(),
    }
}

/// Closes the add funds modal without adding money.
pub async fn dismiss_add_funds_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let result = state.lock_store().and_then(|mut store| store.dismiss());

    match result {
        Ok(snapshot) => respond(is_htmx, wallet_screen_view(&snapshot, &state.animation)),
        Err(error) => error.into_alert_response(),
    }
}

/// Shows or hides the balance.
pub async fn toggle_balance_visibility_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let result = state
        .lock_store()
        .map(|mut store| store.toggle_balance_visibility());

    match result {
        Ok(snapshot) => respond(is_htmx, wallet_screen_view(&snapshot, &state.animation)),
        Err(error) => error.into_alert_response(),
    }
}

/// Send `fragment` to htmx, or send other clients back to the wallet page.
fn respond(is_htmx: bool, fragment: Markup) -> Response {
    if is_htmx {
        fragment.into_response()
    } else {
        Redirect::to(endpoints::ROOT).into_response()
    }
}
