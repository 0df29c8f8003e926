//! The add funds flow: the modal for entering an amount and crediting it to
//! the wallet.
//!
//! The flow is a small state machine:
//!
//! ```text
//! Closed --open--> Open --confirm (valid amount)--> Closed
//!                   |
//!                   +--dismiss--> Closed
//! ```
//!
//! [FlowPhase::Opening] and [FlowPhase::Closing] name the animated phases of
//! the modal. Transitions jump straight to [FlowPhase::Open] and
//! [FlowPhase::Closed] and leave a [ModalAnimation] hint for the renderer.

use std::fmt::Display;

use serde::Serialize;

use crate::{
    Error,
    amount::Amount,
    animation::ModalAnimation,
    transaction::Transaction,
    wallet::Wallet,
};

/// The amounts offered as one tap presets in the modal.
pub const PRESET_AMOUNTS: [u32; 4] = [10, 50, 100, 500];

/// Where the modal is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPhase {
    /// The modal is not shown.
    Closed,
    /// The modal is sliding into view.
    Opening,
    /// The modal is shown and accepts input.
    Open,
    /// The modal is sliding out of view.
    Closing,
}

impl Display for FlowPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowPhase::Closed => "closed",
            FlowPhase::Opening => "opening",
            FlowPhase::Open => "open",
            FlowPhase::Closing => "closing",
        };

        write!(f, "{name}")
    }
}

/// The user actions that drive the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// Show the modal.
    Open,
    /// Type into the amount field.
    SetAmountText,
    /// Tap one of the preset amounts.
    SelectPreset,
    /// Tap the confirm button.
    Confirm,
    /// Close the modal without adding money.
    Dismiss,
}

impl Display for FlowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowAction::Open => "open",
            FlowAction::SetAmountText => "set amount text",
            FlowAction::SelectPreset => "select preset",
            FlowAction::Confirm => "confirm",
            FlowAction::Dismiss => "dismiss",
        };

        write!(f, "{name}")
    }
}

/// The state of the add funds modal.
#[derive(Debug, Clone, PartialEq)]
pub struct AddFundsFlow {
    phase: FlowPhase,
    pending_amount_text: String,
    animation: Option<ModalAnimation>,
}

impl Default for AddFundsFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AddFundsFlow {
    /// Create a closed flow.
    pub fn new() -> Self {
        Self {
            phase: FlowPhase::Closed,
            pending_amount_text: String::new(),
            animation: None,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// Whether the modal is mounted.
    pub fn is_visible(&self) -> bool {
        self.phase != FlowPhase::Closed
    }

    /// The text in the amount field, exactly as entered.
    pub fn pending_amount_text(&self) -> &str {
        &self.pending_amount_text
    }

    /// Whether the amount field holds a positive number, i.e. whether
    /// confirming would add money.
    pub fn is_valid(&self) -> bool {
        Amount::parse(&self.pending_amount_text).is_ok()
    }

    /// The animation left by the last transition, if any.
    pub fn animation(&self) -> Option<ModalAnimation> {
        self.animation
    }

    /// Forget the animation left by the last transition.
    pub fn clear_animation(&mut self) {
        self.animation = None;
    }

    /// Show the modal with an empty amount field.
    ///
    /// # Errors
    /// Returns [Error::InvalidFlowTransition] if the modal is already shown.
    pub fn open(&mut self) -> Result<(), Error> {
        self.require(FlowPhase::Closed, FlowAction::Open)?;

        self.pending_amount_text.clear();
        self.phase = FlowPhase::Open;
        self.animation = Some(ModalAnimation::SlideIn);

        Ok(())
    }

    /// Replace the text in the amount field with `text`.
    ///
    /// The text is stored verbatim, validation happens on [AddFundsFlow::confirm].
    ///
    /// # Errors
    /// Returns [Error::InvalidFlowTransition] if the modal is not shown.
    pub fn set_amount_text(&mut self, text: &str) -> Result<(), Error> {
        self.require(FlowPhase::Open, FlowAction::SetAmountText)?;

        text.clone_into(&mut self.pending_amount_text);
        self.animation = None;

        Ok(())
    }

    /// Fill the amount field with one of the [PRESET_AMOUNTS].
    ///
    /// # Errors
    /// Returns [Error::InvalidFlowTransition] if the modal is not shown, or
    /// [Error::UnknownPreset] if `amount` is not a preset.
    pub fn select_preset(&mut self, amount: u32) -> Result<(), Error> {
        self.require(FlowPhase::Open, FlowAction::SelectPreset)?;

        if !PRESET_AMOUNTS.contains(&amount) {
            return Err(Error::UnknownPreset(amount));
        }

        self.pending_amount_text = amount.to_string();
        self.animation = None;

        Ok(())
    }

    /// Credit the amount in the field to `wallet` and close the modal.
    ///
    /// If the field does not hold a positive number nothing happens: the
    /// modal stays open with its text and `Ok(None)` is returned.
    ///
    /// # Errors
    /// Returns [Error::InvalidFlowTransition] if the modal is not shown.
    pub fn confirm(&mut self, wallet: &mut Wallet) -> Result<Option<Transaction>, Error> {
        self.require(FlowPhase::Open, FlowAction::Confirm)?;
        self.animation = None;

        let Ok(amount) = Amount::parse(&self.pending_amount_text) else {
            tracing::debug!(
                "ignoring confirm with invalid amount {:?}",
                self.pending_amount_text
            );
            return Ok(None);
        };

        let transaction = wallet.credit(amount.value())?;
        self.close();

        Ok(Some(transaction))
    }

    /// Close the modal without adding money, discarding the amount field.
    ///
    /// # Errors
    /// Returns [Error::InvalidFlowTransition] if the modal is not shown.
    pub fn dismiss(&mut self) -> Result<(), Error> {
        self.require(FlowPhase::Open, FlowAction::Dismiss)?;

        self.close();

        Ok(())
    }

    fn close(&mut self) {
        self.pending_amount_text.clear();
        self.phase = FlowPhase::Closed;
        self.animation = Some(ModalAnimation::SlideOut);
    }

    fn require(&self, phase: FlowPhase, action: FlowAction) -> Result<(), Error> {
        if self.phase == phase {
            Ok(())
        } else {
            tracing::warn!("cannot {action} while the add funds flow is {}", self.phase);
            Err(Error::InvalidFlowTransition {
                action,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        add_funds::{AddFundsFlow, FlowAction, FlowPhase, PRESET_AMOUNTS},
        animation::ModalAnimation,
        transaction::{ADDED_MONEY_TITLE, TransactionKind},
        wallet::Wallet,
    };

    fn open_flow() -> AddFundsFlow {
        let mut flow = AddFundsFlow::new();
        flow.open().expect("Could not open flow");
        flow
    }

    #[test]
    fn starts_closed() {
        let flow = AddFundsFlow::new();

        assert_eq!(flow.phase(), FlowPhase::Closed);
        assert!(!flow.is_visible());
        assert_eq!(flow.pending_amount_text(), "");
        assert_eq!(flow.animation(), None);
    }

    #[test]
    fn open_shows_modal_and_slides_in() {
        let flow = open_flow();

        assert_eq!(flow.phase(), FlowPhase::Open);
        assert!(flow.is_visible());
        assert_eq!(flow.animation(), Some(ModalAnimation::SlideIn));
    }

    #[test]
    fn open_resets_amount_text() {
        let mut flow = open_flow();
        flow.set_amount_text("42").unwrap();
        flow.dismiss().unwrap();

        flow.open().unwrap();

        assert_eq!(flow.pending_amount_text(), "");
    }

    #[test]
    fn open_fails_when_already_open() {
        let mut flow = open_flow();
        flow.set_amount_text("12").unwrap();

        let result = flow.open();

        assert_eq!(
            result,
            Err(Error::InvalidFlowTransition {
                action: FlowAction::Open,
                phase: FlowPhase::Open
            })
        );
        assert_eq!(flow.pending_amount_text(), "12");
    }

    #[test]
    fn actions_fail_when_closed() {
        let mut flow = AddFundsFlow::new();
        let mut wallet = Wallet::new();

        assert!(matches!(
            flow.set_amount_text("5"),
            Err(Error::InvalidFlowTransition { .. })
        ));
        assert!(matches!(
            flow.select_preset(10),
            Err(Error::InvalidFlowTransition { .. })
        ));
        assert!(matches!(
            flow.confirm(&mut wallet),
            Err(Error::InvalidFlowTransition { .. })
        ));
        assert!(matches!(
            flow.dismiss(),
            Err(Error::InvalidFlowTransition { .. })
        ));
        assert_eq!(flow, AddFundsFlow::new());
        assert!(wallet.is_empty());
    }

    #[test]
    fn set_amount_text_stores_text_verbatim() {
        let mut flow = open_flow();

        flow.set_amount_text(" 12.50abc ").unwrap();

        assert_eq!(flow.pending_amount_text(), " 12.50abc ");
        assert!(!flow.is_valid());
        assert_eq!(flow.animation(), None);
    }

    #[test]
    fn is_valid_only_for_positive_numbers() {
        let mut flow = open_flow();

        for (text, want_valid) in [
            ("", false),
            ("abc", false),
            ("0", false),
            ("-5", false),
            ("0.01", true),
            ("50", true),
        ] {
            flow.set_amount_text(text).unwrap();
            assert_eq!(flow.is_valid(), want_valid, "is_valid for {text:?}");
        }
    }

    #[test]
    fn select_preset_sets_canonical_text() {
        let mut flow = open_flow();

        for preset in PRESET_AMOUNTS {
            flow.select_preset(preset).unwrap();
            assert_eq!(flow.pending_amount_text(), preset.to_string());
        }
    }

    #[test]
    fn select_preset_rejects_other_amounts() {
        let mut flow = open_flow();
        flow.set_amount_text("7").unwrap();

        let result = flow.select_preset(20);

        assert_eq!(result, Err(Error::UnknownPreset(20)));
        assert_eq!(flow.pending_amount_text(), "7");
    }

    #[test]
    fn confirm_with_empty_text_is_a_no_op() {
        let mut flow = open_flow();
        let mut wallet = Wallet::new();

        let result = flow.confirm(&mut wallet);

        assert_eq!(result, Ok(None));
        assert_eq!(flow.phase(), FlowPhase::Open);
        assert_eq!(wallet, Wallet::new());
    }

    #[test]
    fn confirm_with_invalid_text_keeps_text() {
        let mut wallet = Wallet::new();

        for text in ["abc", "0", "-20"] {
            let mut flow = open_flow();
            flow.set_amount_text(text).unwrap();

            assert_eq!(flow.confirm(&mut wallet), Ok(None));
            assert_eq!(flow.phase(), FlowPhase::Open);
            assert_eq!(flow.pending_amount_text(), text);
        }

        assert!(wallet.is_empty());
    }

    #[test]
    fn confirm_with_valid_text_credits_and_closes() {
        let mut flow = open_flow();
        let mut wallet = Wallet::new();
        flow.set_amount_text("50").unwrap();

        let transaction = flow
            .confirm(&mut wallet)
            .unwrap()
            .expect("want a transaction");

        assert_eq!(flow.phase(), FlowPhase::Closed);
        assert_eq!(flow.pending_amount_text(), "");
        assert_eq!(flow.animation(), Some(ModalAnimation::SlideOut));
        assert_eq!(wallet.balance(), 50.0);
        assert_eq!(transaction.amount, 50.0);
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.title, ADDED_MONEY_TITLE);
        assert_eq!(wallet.history()[0], transaction);
    }

    #[test]
    fn preset_and_typed_amount_give_same_result() {
        let mut preset_flow = open_flow();
        let mut preset_wallet = Wallet::new();
        preset_flow.select_preset(100).unwrap();
        preset_flow.confirm(&mut preset_wallet).unwrap();

        let mut typed_flow = open_flow();
        let mut typed_wallet = Wallet::new();
        typed_flow.set_amount_text("100").unwrap();
        typed_flow.confirm(&mut typed_wallet).unwrap();

        assert_eq!(preset_flow, typed_flow);
        assert_eq!(preset_wallet.balance(), typed_wallet.balance());
        assert_eq!(preset_wallet.len(), typed_wallet.len());
        assert_eq!(
            preset_wallet.history()[0].amount,
            typed_wallet.history()[0].amount
        );
    }

    #[test]
    fn dismiss_closes_without_crediting() {
        let mut wallet = Wallet::new();
        wallet.credit(20.0).unwrap();
        let before = wallet.clone();

        for text in ["", "abc", "50", "-1"] {
            let mut flow = open_flow();
            flow.set_amount_text(text).unwrap();

            flow.dismiss().unwrap();

            assert_eq!(flow.phase(), FlowPhase::Closed);
            assert_eq!(flow.pending_amount_text(), "");
            assert_eq!(flow.animation(), Some(ModalAnimation::SlideOut));
        }

        assert_eq!(wallet, before);
    }
}
