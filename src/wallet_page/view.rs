//! Renders the wallet screen from a [Snapshot].
//!
//! Every function here is a pure function of its arguments: rendering the same
//! snapshot twice produces the same HTML.

use maud::{Markup, html};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    add_funds::PRESET_AMOUNTS,
    animation::{AnimationConfig, ModalAnimation},
    endpoints::{self, format_endpoint},
    html::{
        BALANCE_PLACEHOLDER, BUTTON_PRESET_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE,
        CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
        dollar_input_styles, format_currency,
    },
    store::{FlowSnapshot, Snapshot},
    transaction::{Transaction, TransactionKind},
};

pub(crate) const WALLET_SCREEN_ID: &str = "wallet-screen";
pub(crate) const ADD_FUNDS_MODAL_ID: &str = "add-funds-modal";
pub(crate) const CONFIRM_BUTTON_ID: &str = "confirm-add-funds";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[day] [month repr:short] [year], [hour]:[minute]");

/// The full wallet page.
///
/// Animation hints are only played by the fragment that answers the event
/// that caused them, so a loaded page shows the modal at rest.
pub fn wallet_page_view(snapshot: &Snapshot, animation: &AnimationConfig) -> Markup {
    let mut at_rest = snapshot.clone();
    at_rest.flow.animation = None;

    base(
        "Wallet",
        &[dollar_input_styles()],
        &wallet_screen_view(&at_rest, animation),
    )
}

/// Everything on the wallet page, swapped in as a whole after most events.
pub fn wallet_screen_view(snapshot: &Snapshot, animation: &AnimationConfig) -> Markup {
    let screen_target = format!("#{WALLET_SCREEN_ID}");

    html! {
        div
            id=(WALLET_SCREEN_ID)
            class=(PAGE_CONTAINER_STYLE)
            hx-target=(screen_target)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
        {
            h1 class="self-start text-2xl font-bold" { "My Wallet" }

            (balance_card(snapshot))
            (action_buttons(animation))
            (transaction_list(&snapshot.history))
            (add_funds_modal(&snapshot.flow, animation))
        }
    }
}

fn balance_card(snapshot: &Snapshot) -> Markup {
    let (balance_text, toggle_label) = if snapshot.balance_hidden {
        (BALANCE_PLACEHOLDER.to_owned(), "Show balance")
    } else {
        (format_currency(snapshot.balance), "Hide balance")
    };

    html! {
        section class=(CARD_STYLE) aria-label="Balance"
        {
            div class="flex justify-between items-baseline"
            {
                h2 class="text-sm text-gray-600 dark:text-gray-400" { "Total Balance" }

                form
                    method="post"
                    action=(endpoints::BALANCE_VISIBILITY)
                    hx-post=(endpoints::BALANCE_VISIBILITY)
                {
                    button
                        type="submit"
                        id="toggle-balance"
                        class="text-sm text-blue-600 dark:text-blue-400 underline"
                    {
                        (toggle_label)
                    }
                }
            }

            p id="balance" class="mt-2 text-4xl font-extrabold tracking-tight" { (balance_text) }
        }
    }
}

fn action_buttons(animation: &AnimationConfig) -> Markup {
    let press_style = animation.press_style();

    html! {
        div class="grid grid-cols-3 gap-3 w-full"
        {
            form
                method="post"
                action=(endpoints::OPEN_ADD_FUNDS)
                hx-post=(endpoints::OPEN_ADD_FUNDS)
            {
                button
                    type="submit"
                    id="add-money"
                    class={ (BUTTON_PRIMARY_STYLE) " press-feedback" }
                    style=(press_style)
                {
                    "Add Money"
                }
            }

            // Sending and requesting money are not available in the demo.
            button type="button" class=(BUTTON_SECONDARY_STYLE) disabled { "Send" }
            button type="button" class=(BUTTON_SECONDARY_STYLE) disabled { "Request" }
        }
    }
}

fn transaction_list(history: &[Transaction]) -> Markup {
    html! {
        section class="w-full" aria-label="Transactions"
        {
            h2 class="text-xl font-semibold mb-4" { "Recent Transactions" }

            @if history.is_empty() {
                p id="no-transactions" class="text-gray-600 dark:text-gray-400"
                {
                    "No transactions yet. Add some money to get started."
                }
            } @else {
                ul id="transactions" class="flex flex-col gap-2"
                {
                    @for transaction in history {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (sign, amount_style) = match transaction.kind {
        TransactionKind::Income => ("+", "font-semibold text-green-700 dark:text-green-400"),
        TransactionKind::Expense => ("-", "font-semibold text-red-700 dark:text-red-400"),
    };

    html! {
        li
            class="flex justify-between items-center bg-white dark:bg-gray-800 \
                rounded-lg px-4 py-3 shadow-sm"
            data-transaction-id=(transaction.id)
        {
            div
            {
                p class="font-medium" { (transaction.title) }
                p class="text-xs text-gray-500 dark:text-gray-400"
                {
                    (format_timestamp(transaction.timestamp))
                }
            }

            span class=(amount_style) { (sign) (format_currency(transaction.amount)) }
        }
    }
}

fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| timestamp.date().to_string())
}

/// The add funds modal.
///
/// A closed modal is rendered once more while it slides out, after that it is
/// omitted from the page.
pub fn add_funds_modal(flow: &FlowSnapshot, animation: &AnimationConfig) -> Markup {
    if !flow.visible {
        return match flow.animation {
            Some(ModalAnimation::SlideOut) => closing_modal(animation),
            _ => html! {},
        };
    }

    let modal_target = format!("#{ADD_FUNDS_MODAL_ID}");
    let confirm_target = format!("#{CONFIRM_BUTTON_ID}");
    let (animation_class, animation_style) = match flow.animation {
        Some(modal_animation) => (
            modal_animation.css_class(),
            animation.style_for(modal_animation),
        ),
        None => ("", String::new()),
    };

    html! {
        div
            id=(ADD_FUNDS_MODAL_ID)
            class="fixed inset-0 z-40 flex items-end justify-center bg-black/40"
            role="dialog"
            aria-modal="true"
            aria-labelledby="add-funds-title"
        {
            div
                class={ "w-full max-w-md bg-white dark:bg-gray-800 rounded-t-2xl p-6 \
                    space-y-4 shadow-xl " (animation_class) }
                style=(animation_style)
            {
                h2 id="add-funds-title" class="text-xl font-bold" { "Add Money" }

                form
                    id="add-funds-form"
                    method="post"
                    action=(endpoints::CONFIRM_ADD_FUNDS)
                    hx-post=(endpoints::CONFIRM_ADD_FUNDS)
                    class="flex flex-col gap-4"
                {
                    div class="order-1"
                    {
                        label for="amount_text" class=(FORM_LABEL_STYLE) { "Amount" }

                        div class="input-wrapper w-full"
                        {
                            input
                                name="amount_text"
                                id="amount_text"
                                type="text"
                                inputmode="decimal"
                                autocomplete="off"
                                placeholder="0.00"
                                autofocus
                                value=(flow.pending_amount_text)
                                hx-put=(endpoints::ADD_FUNDS_AMOUNT)
                                hx-trigger="input changed delay:150ms"
                                hx-target=(confirm_target)
                                hx-swap="outerHTML"
                                class=(FORM_TEXT_INPUT_STYLE);
                        }
                    }

                    // Confirm comes first so that it is the form's default button.
                    (confirm_button(flow.is_valid))

                    div id="presets" class="order-2 flex flex-wrap gap-2"
                    {
                        @for preset in PRESET_AMOUNTS {
                            @let preset_url = format_endpoint(endpoints::ADD_FUNDS_PRESET, preset);

                            button
                                type="submit"
                                formaction=(preset_url)
                                hx-post=(preset_url)
                                hx-target=(modal_target)
                                class=(BUTTON_PRESET_STYLE)
                            {
                                "$" (preset)
                            }
                        }
                    }

                    button
                        type="submit"
                        id="dismiss-add-funds"
                        formaction=(endpoints::DISMISS_ADD_FUNDS)
                        hx-post=(endpoints::DISMISS_ADD_FUNDS)
                        class={ (BUTTON_SECONDARY_STYLE) " order-4" }
                    {
                        "Cancel"
                    }
                }
            }
        }
    }
}

fn closing_modal(animation: &AnimationConfig) -> Markup {
    html! {
        div
            id=(ADD_FUNDS_MODAL_ID)
            class="fixed inset-0 z-40 flex items-end justify-center pointer-events-none"
            aria-hidden="true"
        {
            div
                class={ "w-full max-w-md h-64 bg-white dark:bg-gray-800 rounded-t-2xl \
                    shadow-xl " (ModalAnimation::SlideOut.css_class()) }
                style=(animation.style_for(ModalAnimation::SlideOut))
            {}
        }
    }
}

/// The button that submits the add funds form.
///
/// The button is disabled until the amount field holds a positive number.
pub fn confirm_button(is_valid: bool) -> Markup {
    html! {
        button
            type="submit"
            id=(CONFIRM_BUTTON_ID)
            class={ (BUTTON_PRIMARY_STYLE) " order-3" }
            disabled[!is_valid]
        {
            "Add Money"
        }
    }
}
