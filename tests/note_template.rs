// tests/note_template.rs
use lead_agent::note::{compose, compose_with};

#[test]
fn default_template_renders_exactly() {
    let note = compose("Ada", "VP Sales", "MadKudu", "Score leads");
    assert_eq!(
        note,
        "Hello Ada,\n\n\
         I recently explored MadKudu and was impressed by its innovative approach: \
         'Score leads'. Your role as VP Sales must be key to its success. \
         I would love to connect and learn more about your experience."
    );
}

#[test]
fn all_inputs_appear_verbatim() {
    let (name, job, company, vp) = ("Grace H.", "Head of Growth", "Acme, Inc.", "We help B2B teams: faster.");
    let note = compose(name, job, company, vp);
    for part in [name, job, company, vp] {
        assert!(note.contains(part), "missing {part:?}");
    }
}

#[test]
fn empty_inputs_leave_empty_slots() {
    let note = compose("", "", "", "");
    assert!(note.starts_with("Hello ,\n\n"));
    assert!(note.contains("approach: ''."));
    assert!(note.contains("Your role as  must"));
}

#[test]
fn placeholders_inside_inputs_are_not_expanded() {
    let note = compose("{job_title}", "CTO", "Acme", "{contact_name}");
    assert!(note.starts_with("Hello {job_title},"));
    assert!(note.contains("'{contact_name}'"));
}

#[test]
fn custom_template() {
    let note = compose_with("Hi {contact_name} ({job_title}) @ {company_name}: {value_proposition} {unknown}", "A", "B", "C", "D");
    assert_eq!(note, "Hi A (B) @ C: D {unknown}");
}
