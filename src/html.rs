use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::endpoints;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-300 disabled:dark:bg-blue-900 \
    disabled:cursor-not-allowed hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 active:enabled:scale-95 text-white rounded \
    transition-transform";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full py-2.5 px-5 \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:enabled:bg-gray-100 hover:enabled:text-blue-700 active:enabled:scale-95 \
    disabled:opacity-50 disabled:cursor-not-allowed dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 transition-transform";

pub const BUTTON_PRESET_STYLE: &str = "px-3 py-2 text-sm font-semibold \
    rounded-full border border-blue-200 text-blue-700 bg-blue-50 \
    hover:bg-blue-100 active:scale-95 dark:border-blue-800 dark:bg-blue-900/30 \
    dark:text-blue-200 transition-transform";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Card styles
pub const CARD_STYLE: &str = "w-full bg-white dark:bg-gray-800 border \
    border-gray-200 dark:border-gray-700 rounded-lg p-4 shadow-md";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col items-center gap-6 px-6 \
    py-8 mx-auto max-w-md text-gray-900 dark:text-white";

pub enum HeadElement {
    Style(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Walleteur" }
                link href={ (endpoints::STATIC) "/app.css" } rel="stylesheet";

                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script src="https://unpkg.com/htmx.org@2.0.8" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href=(endpoints::ROOT)
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Wallet"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// Returns the CSS styles for adding a dollar sign prefix to the amount input.
pub fn dollar_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
            display: block;
        }
        .input-wrapper input {
            padding-left: 1.4rem;
        }
        .input-wrapper::before {
            content: '$';
            position: absolute;
            left: 0.6rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(2)))
    });

    static NEGATIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(2)))
    });

    let (Some(positive_fmt), Some(negative_fmt)) = (positive_fmt, negative_fmt) else {
        return format_currency_plain(number);
    };

    if number == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    }

    // numfmt switches to exponent form outside of this range.
    if !(NUMFMT_MIN..NUMFMT_MAX).contains(&number.abs()) {
        return format_currency_plain(number);
    }

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else {
        positive_fmt.fmt_string(number)
    };

    if formatted_string.contains('e') {
        return format_currency_plain(number);
    }

    // numfmt omits trailing zeros, e.g. "12.30" is rendered as "12.3" and
    // "50.00" as "50", so pad the decimals back out.
    match formatted_string.find('.') {
        None => formatted_string.push_str(".00"),
        Some(point) if formatted_string.len() - point == 2 => formatted_string.push('0'),
        Some(_) => {}
    }

    formatted_string
}

const NUMFMT_MIN: f64 = 0.01;
const NUMFMT_MAX: f64 = 1e12;

/// Format `number` with two decimals and comma separated thousands, without
/// going through numfmt.
fn format_currency_plain(number: f64) -> String {
    if !number.is_finite() {
        return if number < 0.0 { "-$∞" } else { "$∞" }.to_owned();
    }

    let sign = if number < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", number.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if grouped == "0" && cents == "00" {
        return "$0.00".to_owned();
    }

    format!("{sign}${grouped}.{cents}")
}

/// The text shown in place of the balance when it is hidden.
pub const BALANCE_PLACEHOLDER: &str = "$••••••";
