// src/core/text.rs
use scraper::{ElementRef, Node};

/// Subtrees whose text never renders.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Collapse whitespace runs to a single ' ' and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    if out.ends_with(' ') { out.pop(); }
    out
}

/// Visible text under `el`: every text node outside hidden subtrees,
/// whitespace-normalized, empties dropped, joined with single spaces.
pub fn visible_text(el: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_text(el, &mut parts);
    parts.join(" ")
}

fn collect_text(el: ElementRef<'_>, out: &mut Vec<String>) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => {
                let t = normalize_ws(t);
                if !t.is_empty() { out.push(t); }
            }
            Node::Element(e) if HIDDEN_TAGS.contains(&e.name()) => {}
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}
