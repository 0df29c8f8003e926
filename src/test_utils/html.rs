use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

#[track_caller]
pub(crate) fn select_all<'a>(html: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    let parsed_selector =
        Selector::parse(selector).unwrap_or_else(|_| panic!("Invalid selector {selector:?}"));

    html.select(&parsed_selector).collect()
}

#[track_caller]
pub(crate) fn must_select_one<'a>(html: &'a Html, selector: &str) -> ElementRef<'a> {
    let elements = select_all(html, selector);

    assert_eq!(
        elements.len(),
        1,
        "want 1 element matching {selector:?}, got {}",
        elements.len()
    );

    elements[0]
}

/// The text content of `element` with surrounding whitespace removed.
pub(crate) fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}
