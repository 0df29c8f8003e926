#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;

pub(crate) use html::{
    assert_valid_html, must_select_one, parse_html_document, parse_html_fragment, select_all,
    text_of,
};
pub(crate) use http::{assert_content_type, assert_status_ok};
