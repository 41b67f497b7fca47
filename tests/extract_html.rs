// tests/extract_html.rs
use lead_agent::config::consts::{FALLBACK_TITLE, FALLBACK_VALUE_PROPOSITION};
use lead_agent::config::options::ScrapeOptions;
use lead_agent::scrape::{self, Fetch, ScrapeResult, extract_from_html};
use lead_agent::{Error, Result};

struct Canned(&'static str);
impl Fetch for Canned {
    fn fetch(&self, _url: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct Down;
impl Fetch for Down {
    fn fetch(&self, url: &str) -> Result<String> {
        Err(Error::Status { status: 503, url: url.to_string() })
    }
}

const LANDING: &str = r#"<!doctype html>
<html><head>
  <title>Acme | Predictive Lead Scoring</title>
  <meta name="description" content="Find the leads that convert.">
</head><body>
  <section><h2>Score</h2><p>every   lead</p></section>
  <section>Route <b>fast</b><script>var x = 1;</script></section>
  <section><style>.a{}</style>Grow</section>
  <section>Never shown</section>
</body></html>"#;

#[test]
fn title_and_meta_are_read() {
    let page = extract_from_html(LANDING);
    assert_eq!(page.title, "Acme | Predictive Lead Scoring");
    assert_eq!(page.value_proposition, "Find the leads that convert.");
}

#[test]
fn title_is_kept_verbatim() {
    let padded = extract_from_html("<html><head><title>  Acme  Home \n</title></head></html>");
    assert_eq!(padded.title, "  Acme  Home \n");

    let empty = extract_from_html("<html><head><title></title></head></html>");
    assert_eq!(empty.title, "");
}

#[test]
fn only_first_three_sections_are_joined() {
    let page = extract_from_html(LANDING);
    assert_eq!(page.additional_info, "Score every lead Route fast Grow");
    assert!(!page.additional_info.contains("Never shown"));
    assert!(!page.additional_info.contains("var x"));
}

#[test]
fn fewer_than_three_sections() {
    let one = extract_from_html("<html><body><section> only  one </section></body></html>");
    assert_eq!(one.additional_info, "only one");

    let two = extract_from_html(
        "<html><body><section>first</section><div>skip</div><section><p>second</p></section></body></html>",
    );
    assert_eq!(two.additional_info, "first second");

    let none = extract_from_html("<html><body><div>no sections</div></body></html>");
    assert_eq!(none.additional_info, "");
}

#[test]
fn missing_elements_fall_back() {
    let page = extract_from_html("<html><body><p>bare</p></body></html>");
    assert_eq!(page.title, FALLBACK_TITLE);
    assert_eq!(page.value_proposition, FALLBACK_VALUE_PROPOSITION);
}

#[test]
fn meta_without_content_falls_back() {
    let page = extract_from_html(r#"<html><head><meta name="description"></head></html>"#);
    assert_eq!(page.value_proposition, FALLBACK_VALUE_PROPOSITION);
}

#[test]
fn summary_display_matches_dialog_layout() {
    let page = extract_from_html(LANDING);
    let text = page.to_string();
    assert!(text.starts_with("Title: Acme | Predictive Lead Scoring\n"));
    assert!(text.contains("\nValue Proposition: Find the leads that convert.\n"));
    assert!(text.contains("\nAdditional Info: Score every lead"));
}

#[test]
fn fetcher_success_yields_page() {
    let result = scrape::extract_with(&Canned(LANDING), "https://acme.test");
    match result {
        ScrapeResult::Page(p) => assert_eq!(p.title, "Acme | Predictive Lead Scoring"),
        other => panic!("expected page, got {other:?}"),
    }
}

#[test]
fn fetcher_failure_yields_generic_error() {
    let result = scrape::extract_with(&Down, "https://acme.test");
    assert!(result.is_failed());
    let ScrapeResult::Failed { error } = result else { unreachable!() };
    assert!(error.starts_with("Failed to scrape website: "));
    assert!(error.contains("503"));
}

#[test]
fn unreachable_url_does_not_panic() {
    let opts = ScrapeOptions { timeout_secs: 5, ..ScrapeOptions::default() };
    // Port 1 on loopback: connection refused, no outside network involved.
    let result = scrape::extract(&opts, "http://127.0.0.1:1/");
    let ScrapeResult::Failed { error } = result else {
        panic!("expected failure");
    };
    assert!(error.starts_with("Failed to scrape website: "));
}

#[test]
fn malformed_url_is_a_scrape_failure() {
    let result = scrape::extract(&ScrapeOptions::default(), "not a url");
    assert!(result.is_failed());
    assert_eq!(result.value_proposition(), FALLBACK_VALUE_PROPOSITION);
}
