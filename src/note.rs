// src/note.rs
//
// Outreach note: fixed template, four slots. No validation; empty inputs
// render as empty slots.

use crate::config::consts::NOTE_TEMPLATE;

pub fn compose(
    contact_name: &str,
    job_title: &str,
    company_name: &str,
    value_proposition: &str,
) -> String {
    compose_with(NOTE_TEMPLATE, contact_name, job_title, company_name, value_proposition)
}

pub fn compose_with(
    template: &str,
    contact_name: &str,
    job_title: &str,
    company_name: &str,
    value_proposition: &str,
) -> String {
    render(
        template,
        &[
            ("contact_name", contact_name),
            ("job_title", job_title),
            ("company_name", company_name),
            ("value_proposition", value_proposition),
        ],
    )
}

/// Single pass over `template`: `{key}` is replaced by its slot value,
/// unknown keys and unmatched braces are copied through. Slot values are
/// never rescanned.
pub fn render(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match slots.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
