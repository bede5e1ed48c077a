use chrono::NaiveDateTime;

/// Make a passage reference safe to use as a file name: spaces and colons
/// become underscores, commas and semicolons are dropped.
pub fn sanitize_filename(reference: &str) -> String {
    reference
        .chars()
        .filter(|ch| !matches!(ch, ',' | ';'))
        .map(|ch| match ch {
            ' ' | ':' => '_',
            ch => ch,
        })
        .collect()
}

/// The file name for a combined document: the custom name if one was given
/// (with `.pdf` appended when missing), otherwise one stamped with `now`.
pub fn output_filename(custom: Option<&str>, now: NaiveDateTime) -> String {
    match custom {
        Some(name) if name.to_ascii_lowercase().ends_with(".pdf") => name.to_string(),
        Some(name) => format!("{name}.pdf"),
        None => format!("scripture_{}.pdf", now.format("%Y-%m-%d_%H%M")),
    }
}

/// The file name for one passage when passages are written separately
pub fn passage_filename(reference: &str) -> String {
    format!("{}.pdf", sanitize_filename(reference))
}
