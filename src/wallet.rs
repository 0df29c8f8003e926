//! The in-memory wallet: the current balance and the transaction history.

use serde::Serialize;

use crate::{
    Error,
    amount::Amount,
    transaction::{ADDED_MONEY_TITLE, Transaction, TransactionId},
};

/// Holds the balance and the transactions that produced it.
///
/// The history is ordered newest first. The balance always equals the sum of
/// the signed amounts in the history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wallet {
    balance: f64,
    history: Vec<Transaction>,
    #[serde(skip)]
    next_id: TransactionId,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl Wallet {
    /// Create an empty wallet with a balance of zero.
    pub fn new() -> Self {
        Self {
            balance: 0.0,
            history: Vec::new(),
            next_id: 1,
        }
    }

    /// The current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The transactions, most recent first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// The number of transactions in the history.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the wallet has no transactions.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Add `amount` to the balance and record it as an "Added Money" income.
    ///
    /// Returns the new transaction, which is also the first entry of
    /// [Wallet::history].
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `amount` is not a finite number
    /// greater than zero, or if adding it would push the balance past the
    /// largest representable number. The wallet is left unchanged in that
    /// case.
    pub fn credit(&mut self, amount: f64) -> Result<Transaction, Error> {
        let amount = Amount::new(amount).inspect_err(|error| {
            tracing::error!("refusing to credit wallet: {error}");
        })?;

        if !(self.balance + amount.value()).is_finite() {
            tracing::error!(
                "refusing to credit wallet: adding {amount} to {} overflows the balance",
                self.balance
            );
            return Err(Error::InvalidAmount(amount.to_string()));
        }

        Ok(self.record(Transaction::build(amount, ADDED_MONEY_TITLE).finalize(self.next_id)))
    }

    /// Parse `text` and credit the wallet with the result.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `text` is not a positive decimal
    /// number.
    pub fn credit_text(&mut self, text: &str) -> Result<Transaction, Error> {
        let amount = Amount::parse(text)?;

        self.credit(amount.value())
    }

    fn record(&mut self, transaction: Transaction) -> Transaction {
        self.next_id += 1;
        self.balance += transaction.signed_amount();
        self.history.insert(0, transaction.clone());

        debug_assert!(
            self.balance == self.history_total(),
            "balance {} drifted from history total {}",
            self.balance,
            self.history_total()
        );

        tracing::debug!(
            "recorded transaction {} for {}, balance is now {}",
            transaction.id,
            transaction.amount,
            self.balance
        );

        transaction
    }

    fn history_total(&self) -> f64 {
        // Sum oldest first so rounding matches the running balance.
        self.history
            .iter()
            .rev()
            .map(Transaction::signed_amount)
            .sum()
    }
}
