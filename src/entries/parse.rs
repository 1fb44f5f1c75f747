/// Parsed textual identity for one grid entry (e.g. artist/album).
///
/// Either field may be empty; order in the parsed sequence matches input line
/// order and the top-left-to-bottom-right grid fill.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LabelPair {
    /// Leading part of the label (typically the artist).
    pub primary: String,
    /// Trailing part of the label (typically the album title).
    pub secondary: String,
}

impl LabelPair {
    /// Build a pair from already-trimmed parts.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// True when both fields are empty.
    pub fn is_blank(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Joined `"{primary} - {secondary}"` form with stray separators and
    /// whitespace stripped from both ends. Empty when the pair is blank.
    pub fn display_label(&self) -> String {
        let joined = format!("{} - {}", self.primary, self.secondary);
        joined
            .trim_matches(|c| c == ' ' || c == '-')
            .to_string()
    }
}

/// Parse freeform line-based text into ordered label pairs.
///
/// Lines that are empty after trimming are discarded. Each remaining line is
/// split on the first `" - "`; if absent, on the first bare `"-"`; if no
/// hyphen exists at all the whole line becomes `secondary` with an empty
/// `primary`. Malformed lines never fail, they degrade into a best-effort
/// pair.
pub fn parse_entries(raw: &str) -> Vec<LabelPair> {
    let mut out = Vec::new();
    for line in raw.lines() {
        let s = line.trim();
        if s.is_empty() {
            continue;
        }
        let (primary, secondary) = match s.split_once(" - ") {
            Some((a, b)) => (a, b),
            None => match s.split_once('-') {
                Some((a, b)) => (a, b),
                None => ("", s),
            },
        };
        out.push(LabelPair::new(primary.trim(), secondary.trim()));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/entries/parse.rs"]
mod tests;
