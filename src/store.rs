//! The wallet screen's state and the snapshots handed to the renderer.
//!
//! [WalletStore] applies user events to the wallet and the add funds flow and
//! publishes a [Snapshot] whenever the visible state changes.

use serde::Serialize;
use tokio::sync::watch;

use crate::{
    Error,
    add_funds::{AddFundsFlow, FlowPhase},
    animation::ModalAnimation,
    transaction::Transaction,
    wallet::Wallet,
};

/// An immutable capture of the add funds flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowSnapshot {
    /// The phase of the modal.
    pub phase: FlowPhase,
    /// Whether the modal is mounted.
    pub visible: bool,
    /// The text in the amount field.
    pub pending_amount_text: String,
    /// Whether the amount field holds a positive number.
    pub is_valid: bool,
    /// The animation to play on this render.
    pub animation: Option<ModalAnimation>,
}

impl From<&AddFundsFlow> for FlowSnapshot {
    fn from(flow: &AddFundsFlow) -> Self {
        Self {
            phase: flow.phase(),
            visible: flow.is_visible(),
            pending_amount_text: flow.pending_amount_text().to_owned(),
            is_valid: flow.is_valid(),
            animation: flow.animation(),
        }
    }
}

/// Everything needed to render the wallet screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Increases by one each time a changed snapshot is published.
    pub version: u64,
    /// The wallet balance.
    pub balance: f64,
    /// The transactions, most recent first.
    pub history: Vec<Transaction>,
    /// The add funds modal.
    pub flow: FlowSnapshot,
    /// Whether the balance is masked with a placeholder.
    pub balance_hidden: bool,
}

impl Snapshot {
    fn capture(version: u64, wallet: &Wallet, flow: &AddFundsFlow, balance_hidden: bool) -> Self {
        Self {
            version,
            balance: wallet.balance(),
            history: wallet.history().to_vec(),
            flow: flow.into(),
            balance_hidden,
        }
    }

    /// Whether `self` and `other` would render the same, ignoring versions.
    fn same_state_as(&self, other: &Snapshot) -> bool {
        self.balance == other.balance
            && self.history == other.history
            && self.flow == other.flow
            && self.balance_hidden == other.balance_hidden
    }
}

/// Owns the wallet, the add funds flow and the balance display setting.
#[derive(Debug)]
pub struct WalletStore {
    wallet: Wallet,
    flow: AddFundsFlow,
    balance_hidden: bool,
    version: u64,
    sender: watch::Sender<Snapshot>,
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletStore {
    /// Create a store with an empty wallet and a closed modal.
    pub fn new() -> Self {
        let wallet = Wallet::new();
        let flow = AddFundsFlow::new();
        let (sender, _) = watch::channel(Snapshot::capture(0, &wallet, &flow, false));

        Self {
            wallet,
            flow,
            balance_hidden: false,
            version: 0,
            sender,
        }
    }

    /// The wallet.
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// The add funds flow.
    pub fn flow(&self) -> &AddFundsFlow {
        &self.flow
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.sender.borrow().clone()
    }

    /// Get notified of every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    /// Open the add funds modal. See [AddFundsFlow::open].
    pub fn open(&mut self) -> Result<Snapshot, Error> {
        self.flow.open()?;
        Ok(self.publish())
    }

    /// Type into the amount field. See [AddFundsFlow::set_amount_text].
    pub fn set_amount_text(&mut self, text: &str) -> Result<Snapshot, Error> {
        self.flow.set_amount_text(text)?;
        Ok(self.publish())
    }

    /// Pick a preset amount. See [AddFundsFlow::select_preset].
    pub fn select_preset(&mut self, amount: u32) -> Result<Snapshot, Error> {
        self.flow.select_preset(amount)?;
        Ok(self.publish())
    }

    /// Confirm the amount in the modal. See [AddFundsFlow::confirm].
    ///
    /// Returns the new transaction, if money was added, and the snapshot to
    /// render.
    pub fn confirm(&mut self) -> Result<(Option<Transaction>, Snapshot), Error> {
        let transaction = self.flow.confirm(&mut self.wallet)?;

        if let Some(transaction) = &transaction {
            tracing::info!(
                "added {} to the wallet, balance is now {}",
                transaction.amount,
                self.wallet.balance()
            );
        }

        Ok((transaction, self.publish()))
    }

    /// Close the modal without adding money. See [AddFundsFlow::dismiss].
    pub fn dismiss(&mut self) -> Result<Snapshot, Error> {
        self.flow.dismiss()?;
        Ok(self.publish())
    }

    /// Show or hide the balance behind a placeholder.
    pub fn toggle_balance_visibility(&mut self) -> Snapshot {
        self.balance_hidden = !self.balance_hidden;
        self.flow.clear_animation();
        self.publish()
    }

    /// Publish the current state if it differs from the last snapshot.
    fn publish(&mut self) -> Snapshot {
        let next = Snapshot::capture(
            self.version + 1,
            &self.wallet,
            &self.flow,
            self.balance_hidden,
        );

        let changed = self.sender.send_if_modified(|current| {
            if current.same_state_as(&next) {
                false
            } else {
                *current = next;
                true
            }
        });

        if changed {
            self.version += 1;
            tracing::debug!("published wallet snapshot version {}", self.version);
        }

        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        add_funds::FlowPhase,
        animation::ModalAnimation,
        store::WalletStore,
        transaction::ADDED_MONEY_TITLE,
    };

    #[test]
    fn initial_snapshot_is_empty_and_closed() {
        let store = WalletStore::new();

        let snapshot = store.snapshot();

        assert_eq!(snapshot.version, 0);
        assert_eq!(snapshot.balance, 0.0);
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.flow.phase, FlowPhase::Closed);
        assert!(!snapshot.flow.visible);
        assert!(!snapshot.balance_hidden);
    }

    #[test]
    fn add_money_flow_updates_snapshot() {
        let mut store = WalletStore::new();

        let opened = store.open().unwrap();
        assert!(opened.flow.visible);
        assert_eq!(opened.flow.animation, Some(ModalAnimation::SlideIn));

        let typed = store.set_amount_text("50").unwrap();
        assert!(typed.flow.is_valid);
        assert_eq!(typed.flow.animation, None);

        let (transaction, confirmed) = store.confirm().unwrap();
        let transaction = transaction.expect("want a transaction");

        assert_eq!(confirmed.balance, 50.0);
        assert_eq!(confirmed.history, vec![transaction.clone()]);
        assert_eq!(transaction.title, ADDED_MONEY_TITLE);
        assert_eq!(confirmed.flow.phase, FlowPhase::Closed);
        assert_eq!(confirmed.flow.animation, Some(ModalAnimation::SlideOut));
        assert_eq!(confirmed.version, 3);
    }

    #[test]
    fn inert_confirm_does_not_publish() {
        let mut store = WalletStore::new();
        store.open().unwrap();
        let typed = store.set_amount_text("").unwrap();

        let (transaction, snapshot) = store.confirm().unwrap();

        assert_eq!(transaction, None);
        assert_eq!(snapshot, typed);
    }

    #[test]
    fn failed_transition_does_not_publish() {
        let mut store = WalletStore::new();
        let before = store.snapshot();

        let result = store.dismiss();

        assert!(matches!(result, Err(Error::InvalidFlowTransition { .. })));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn dismiss_leaves_wallet_unchanged() {
        let mut store = WalletStore::new();
        store.open().unwrap();
        store.set_amount_text("500").unwrap();

        let snapshot = store.dismiss().unwrap();

        assert_eq!(snapshot.balance, 0.0);
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.flow.phase, FlowPhase::Closed);
    }

    #[test]
    fn toggle_balance_visibility_flips_mask_only() {
        let mut store = WalletStore::new();
        store.open().unwrap();
        store.select_preset(10).unwrap();
        store.confirm().unwrap();

        let hidden = store.toggle_balance_visibility();
        assert!(hidden.balance_hidden);
        assert_eq!(hidden.balance, 10.0);
        assert_eq!(hidden.flow.animation, None);

        let shown = store.toggle_balance_visibility();
        assert!(!shown.balance_hidden);
    }

    #[tokio::test]
    async fn subscribers_see_every_published_snapshot() {
        let mut store = WalletStore::new();
        let mut receiver = store.subscribe();

        store.open().unwrap();
        receiver.changed().await.unwrap();
        assert!(receiver.borrow_and_update().flow.visible);

        store.set_amount_text("25").unwrap();
        store.confirm().unwrap();
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().balance, 25.0);
    }
}
