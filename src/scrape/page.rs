// src/scrape/page.rs
//
// Pure HTML → PageSummary. No I/O; absent elements fall back to constants.

use std::fmt;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::{FALLBACK_TITLE, FALLBACK_VALUE_PROPOSITION, SECTION_LIMIT};
use crate::core::text::visible_text;

static TITLE: LazyLock<Selector> = LazyLock::new(|| css("title"));
static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| css(r#"meta[name="description"]"#));
static SECTION: LazyLock<Selector> = LazyLock::new(|| css("section"));

fn css(s: &str) -> Selector {
    Selector::parse(s).expect("static selector")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub value_proposition: String,
    pub additional_info: String,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\nValue Proposition: {}\nAdditional Info: {}",
            self.title, self.value_proposition, self.additional_info
        )
    }
}

pub fn extract_from_html(doc: &str) -> PageSummary {
    let html = Html::parse_document(doc);
    PageSummary {
        title: title(&html),
        value_proposition: value_proposition(&html),
        additional_info: additional_info(&html),
    }
}

/// First `<title>` text, untouched.
fn title(html: &Html) -> String {
    html.select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_else(|| s!(FALLBACK_TITLE))
}

/// `content` of the first `<meta name="description">`.
/// A tag without `content` counts as absent.
fn value_proposition(html: &Html) -> String {
    html.select(&META_DESCRIPTION)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(String::from)
        .unwrap_or_else(|| s!(FALLBACK_VALUE_PROPOSITION))
}

/// Visible text of the first SECTION_LIMIT `<section>`s, space-joined.
fn additional_info(html: &Html) -> String {
    html.select(&SECTION)
        .take(SECTION_LIMIT)
        .map(visible_text)
        .collect::<Vec<_>>()
        .join(" ")
}
