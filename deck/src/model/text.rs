//! Copy helpers.

/// A list item split into a bold lead and an optional description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoldPrefix<'a> {
    /// Text before the first colon (the whole item if there is none)
    pub lead: &'a str,
    /// Text after the first colon, untrimmed; `None` without a colon
    pub rest: Option<&'a str>,
}

/// Split `item` on its first colon.
///
/// Later colons stay in `rest`. Whitespace is kept as authored so the
/// description keeps its leading space.
pub fn split_bold_prefix(item: &str) -> BoldPrefix<'_> {
    match item.split_once(':') {
        Some((lead, rest)) => BoldPrefix {
            lead,
            rest: Some(rest),
        },
        None => BoldPrefix { lead: item, rest: None },
    }
}
