//! Conditional class-name merging.
//!
//! Components combine a base class, state classes and caller-supplied
//! classes. Empty entries are skipped and a repeated class keeps only its
//! last position.

/// Merge class names into one `class` attribute value.
///
/// Each item may hold several whitespace-separated classes.
pub fn merge_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let tokens: Vec<&str> = classes
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect();

    tokens
        .iter()
        .enumerate()
        .filter(|&(i, token)| !tokens[i + 1..].contains(token))
        .map(|(_, token)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}
