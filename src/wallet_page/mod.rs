//! The wallet screen: the balance card, the action buttons, the transaction
//! list and the add funds modal.

mod handlers;
mod view;

pub use handlers::{
    confirm_add_funds_endpoint, dismiss_add_funds_endpoint, get_snapshot, get_wallet_page,
    open_add_funds_endpoint, select_preset_endpoint, toggle_balance_visibility_endpoint,
    update_amount_endpoint,
};
