//! Defines the core data model for wallet transactions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::amount::Amount;

/// The identifier of a transaction, unique within a wallet.
pub type TransactionId = u64;

/// The title given to money added through the add funds flow.
pub const ADDED_MONEY_TITLE: &str = "Added Money";

/// Whether a transaction moved money into or out of the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money added to the wallet.
    Income,
    /// Money taken out of the wallet.
    ///
    /// Nothing in the app creates expenses yet, but they are part of the data
    /// model and are handled by the balance and the transaction list.
    Expense,
}

/// An entry in the wallet's history.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short label describing the transaction.
    pub title: String,
    /// The amount of money moved, always positive. See [Transaction::kind]
    /// for the direction.
    pub amount: f64,
    /// When the transaction was created.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Whether the money came in or went out.
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: Amount, title: &str) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            title: title.to_owned(),
            kind: TransactionKind::Income,
            timestamp: None,
        }
    }

    /// The amount with its sign applied: positive for income and negative
    /// for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The builder defaults to an income dated at the time [TransactionBuilder::finalize]
/// is called. The ID is supplied by the wallet that records the transaction.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The positive amount of the transaction.
    pub amount: Amount,
    /// A short label, e.g. "Added Money".
    pub title: String,
    /// The direction of the transaction, defaults to [TransactionKind::Income].
    pub kind: TransactionKind,
    /// When the transaction happened, defaults to now.
    pub timestamp: Option<OffsetDateTime>,
}

impl TransactionBuilder {
    /// Set the kind of the transaction.
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the time of the transaction.
    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Create the [Transaction] with the given `id`.
    pub fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount.value(),
            timestamp: self.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
            kind: self.kind,
        }
    }
}
