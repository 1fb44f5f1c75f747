use super::*;

#[test]
fn splits_on_spaced_separator_first() {
    let pairs = parse_entries("Radiohead - In Rainbows");
    assert_eq!(pairs, vec![LabelPair::new("Radiohead", "In Rainbows")]);
}

#[test]
fn blank_lines_are_dropped_and_bare_hyphen_splits() {
    let pairs = parse_entries("Radiohead - In Rainbows\n\nKanye West-808s");
    assert_eq!(
        pairs,
        vec![
            LabelPair::new("Radiohead", "In Rainbows"),
            LabelPair::new("Kanye West", "808s"),
        ]
    );
}

#[test]
fn line_without_hyphen_becomes_secondary() {
    let pairs = parse_entries("Blonde");
    assert_eq!(pairs, vec![LabelPair::new("", "Blonde")]);
}

#[test]
fn fields_are_trimmed_and_order_is_preserved() {
    let pairs = parse_entries("  a  -  b  \n c - d ");
    assert_eq!(
        pairs,
        vec![LabelPair::new("a", "b"), LabelPair::new("c", "d")]
    );
}

#[test]
fn spaced_separator_splits_only_once() {
    let pairs = parse_entries("Tyler, The Creator - IGOR - Deluxe");
    assert_eq!(
        pairs,
        vec![LabelPair::new("Tyler, The Creator", "IGOR - Deluxe")]
    );
}

#[test]
fn whitespace_only_input_parses_to_nothing() {
    assert!(parse_entries("  \n\t\n").is_empty());
}

#[test]
fn display_label_joins_and_strips() {
    assert_eq!(
        LabelPair::new("Radiohead", "In Rainbows").display_label(),
        "Radiohead - In Rainbows"
    );
    assert_eq!(LabelPair::new("", "808s").display_label(), "808s");
    assert_eq!(LabelPair::new("Kanye West", "").display_label(), "Kanye West");
    assert_eq!(LabelPair::new("", "").display_label(), "");
    assert!(LabelPair::new("", "").is_blank());
}
