//! Walleteur is a single screen wallet demo.
//!
//! It shows a balance, a list of transactions and an "Add Money" modal that
//! credits the wallet. This library provides the wallet model, the state store
//! that drives the screen, and a REST API that directly serves HTML.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod add_funds;
mod alert;
mod amount;
mod animation;
mod app_state;
mod endpoints;
mod error;
mod error_page;
mod html;
mod logging;
mod routing;
mod store;
mod transaction;
mod wallet;
mod wallet_page;

#[cfg(test)]
mod test_utils;

pub use add_funds::{AddFundsFlow, FlowAction, FlowPhase, PRESET_AMOUNTS};
pub use amount::Amount;
pub use animation::{AnimationConfig, ModalAnimation};
pub use app_state::AppState;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use store::{FlowSnapshot, Snapshot, WalletStore};
pub use transaction::{
    ADDED_MONEY_TITLE, Transaction, TransactionBuilder, TransactionId, TransactionKind,
};
pub use wallet::Wallet;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
