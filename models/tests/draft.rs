use models::draft::Draft;

#[test]
fn submit_hands_out_exact_text_and_clears() {
    let mut draft = Draft::new();
    draft.set(" pancakes ");

    assert_eq!(draft.submit(), Some(" pancakes ".to_string()));
    assert_eq!(draft.text(), "");
}

#[test]
fn empty_input_is_not_submitted() {
    let mut draft = Draft::new();

    assert_eq!(draft.submit(), None);
    assert_eq!(draft.text(), "");
}

#[test]
fn whitespace_only_counts_as_empty() {
    let mut draft = Draft::new();
    draft.set("  \t ");

    assert!(draft.is_blank());
    assert_eq!(draft.submit(), None);
    assert_eq!(draft.text(), "  \t ");
}

#[test]
fn every_keystroke_replaces_the_text() {
    let mut draft = Draft::new();

    for value in ["t", "to", "toa", "toast"] {
        draft.set(value);
        assert_eq!(draft.text(), value);
    }

    assert_eq!(draft.submit().as_deref(), Some("toast"));
    assert_eq!(draft.submit(), None);
}
