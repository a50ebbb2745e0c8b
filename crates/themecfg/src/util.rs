/// Collapse a multi-line doc block into a single line for listings.
pub fn format_doc(doc: Option<&str>) -> Option<String> {
    doc.map(|d| {
        d.split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    })
    .filter(|d| !d.is_empty())
}

/// Strip a leading `./` (repeated) so relative patterns and paths compare alike.
pub fn strip_dot_slash(s: &str) -> &str {
    let mut rest = s;
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest
}
